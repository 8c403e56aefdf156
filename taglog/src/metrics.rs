use metriken::{metric, Counter};

#[metric(
    name = "taglog_write",
    description = "number of messages handed to the writer"
)]
pub static LOG_WRITE: Counter = Counter::new();

#[metric(
    name = "taglog_write_ex",
    description = "number of errors returned by stream writer outputs"
)]
pub static LOG_WRITE_EX: Counter = Counter::new();

#[metric(
    name = "taglog_filtered",
    description = "number of messages rejected by the predicate filters"
)]
pub static LOG_FILTERED: Counter = Counter::new();

#[metric(
    name = "taglog_blocked",
    description = "number of messages rejected by the tag blocklist"
)]
pub static LOG_BLOCKED: Counter = Counter::new();

#[metric(
    name = "taglog_unconverted",
    description = "number of values logged without any matching converter"
)]
pub static LOG_UNCONVERTED: Counter = Counter::new();

#[metric(
    name = "taglog_configure",
    description = "number of times the global dispatcher has been installed"
)]
pub static LOG_CONFIGURE: Counter = Counter::new();
