mod common;
mod metric;
mod topic;
