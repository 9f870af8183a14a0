pub mod graph;
pub mod cust_error;
pub mod cover;
pub mod subsets;
pub mod brute_force;
pub mod heuristics;
pub mod samples;
