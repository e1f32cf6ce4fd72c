//! Slice helpers.

/// Alternate elements of `a` and `b`, starting with `a`, for as many pairs as the
/// shorter slice holds; then append the rest of the longer slice in order.
pub fn interleave<T: Copy>(a: &[T], b: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    for (&x, &y) in a.iter().zip(b.iter()) {
        out.push(x);
        out.push(y);
    }
    let paired = a.len().min(b.len());
    let tail = if a.len() > b.len() { a } else { b };
    out.extend_from_slice(&tail[paired..]);
    out
}
