//! Span definitions per propagation policy.

/// Create a total-infection span.
#[macro_export]
macro_rules! total_infection_span {
    ($start:expr, $order:expr) => {
        tracing::info_span!("rollout.total_infection", start = %$start, order = %$order)
    };
}

/// Create a limited-infection span.
#[macro_export]
macro_rules! limited_infection_span {
    ($start:expr, $target:expr) => {
        tracing::info_span!("rollout.limited_infection", start = %$start, target_count = $target)
    };
}

