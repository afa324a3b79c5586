/// Numeric helpers.
///
/// Literal parsing and the finiteness check used to turn IEEE 754 domain
/// failures (NaN, infinities) into errors.
pub mod num;
