mod concurrency;
mod filesystem;
mod scenarios;
