// Cutter constants (No magic values)

/// Upper bound on ready-queue capacity reserved ahead of a single submission.
/// Larger cuts still work, the queue just grows as squares are appended.
pub const MAX_QUEUE_PREALLOCATION: usize = 1 << 16;
