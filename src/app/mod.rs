// Application layer: turns parsed command-line input into library calls.

pub mod commands;
