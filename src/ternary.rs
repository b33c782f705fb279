/// A ternary expression handler.  Rust's `if` is already an
/// expression, but `cargo fmt` splits it across five lines, and the
/// border-replication tables in the energy and seam code are much
/// easier to read as single-line (condition, then, else) triples.
#[macro_export]
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}
