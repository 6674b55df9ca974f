mod agents;
mod compliance;
mod conversations;
mod graph;
mod media;
mod memories;
mod observability;
mod search;
mod versions;
mod webhooks;
