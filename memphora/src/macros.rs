/// Creates a single conversation [`Turn`](crate::Turn) from a role shorthand.
///
/// ```rust
/// use memphora::{TurnRole, mp_turn};
///
/// let turn = mp_turn!(assistant => "Noted.");
/// assert_eq!(turn.role, TurnRole::Assistant);
/// assert_eq!(turn.content, "Noted.");
/// ```
#[macro_export]
macro_rules! mp_turn {
    (system => $content:expr $(,)?) => {
        $crate::Turn::system($content)
    };
    (user => $content:expr $(,)?) => {
        $crate::Turn::user($content)
    };
    (assistant => $content:expr $(,)?) => {
        $crate::Turn::assistant($content)
    };
    ($role:ident => $content:expr $(,)?) => {
        compile_error!("unsupported role: use system, user, or assistant");
    };
}

/// Creates a `Vec<Turn>` from role/content pairs.
///
/// ```rust
/// use memphora::{TurnRole, mp_turns};
///
/// let turns = mp_turns![
///     user => "I moved to Lisbon.",
///     assistant => "Nice, I'll remember that.",
/// ];
///
/// assert_eq!(turns.len(), 2);
/// assert_eq!(turns[0].role, TurnRole::User);
/// assert_eq!(turns[1].role, TurnRole::Assistant);
/// ```
#[macro_export]
macro_rules! mp_turns {
    () => {
        Vec::<$crate::Turn>::new()
    };
    ($($role:ident => $content:expr),+ $(,)?) => {
        vec![$($crate::mp_turn!($role => $content)),+]
    };
}

/// Creates an [`Invocation`](crate::Invocation): positional arguments first,
/// then named arguments after a `;`.
///
/// ```rust
/// use memphora::mp_invocation;
///
/// let invocation = mp_invocation!("hello", 3; message => "hi", verbose => true);
/// assert_eq!(invocation.args.len(), 2);
/// assert_eq!(invocation.kwarg_str("message"), Some("hi"));
///
/// let named_only = mp_invocation!(; query => "tea");
/// assert!(named_only.args.is_empty());
/// ```
#[macro_export]
macro_rules! mp_invocation {
    () => {
        $crate::Invocation::new()
    };
    ($($arg:expr),* $(,)? $(; $($key:ident => $value:expr),* $(,)?)?) => {
        $crate::Invocation::new()
            $(.with_arg($arg))*
            $($(.with_kwarg(stringify!($key), $value))*)?
    };
}
