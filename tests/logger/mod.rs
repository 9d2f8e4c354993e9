mod smoke;
mod concurrency;
