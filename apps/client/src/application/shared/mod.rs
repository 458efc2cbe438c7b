pub mod best_effort;
