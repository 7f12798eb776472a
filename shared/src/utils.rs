//! # Shared Utility Functions
//!
//! Display helpers for `0x`-prefixed account and contract addresses.
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "0x5FbDB2315678afecb367f032d93F642f64180aa3";
//! assert_eq!(format_address(address, 6, 4), "0x5FbD...0aa3");
//! ```

/// Format an address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";
/// assert_eq!(format_address(addr, 6, 4), "0xf39F...2266");
/// assert_eq!(format_address(addr, 8, 6), "0xf39Fd6...b92266");
/// assert_eq!(format_address("0xabc", 6, 4), "0xabc");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    if !address.is_ascii()
        || address_len <= prefix_len + suffix_len
        || prefix_len >= address_len
        || suffix_len >= address_len
    {
        return address.to_string();
    }

    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Format an address keeping the `0x` prefix plus four characters on each side.
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// let addr = "0x5FbDB2315678afecb367f032d93F642f64180aa3";
/// assert_eq!(truncate_address(addr), "0x5FbD...0aa3");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_address() {
        let addr = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";
        assert_eq!(format_address(addr, 6, 4), "0xf39F...2266");
        assert_eq!(format_address(addr, 4, 4), "0xf3...2266");
        assert_eq!(format_address(addr, 2, 2), "0x...66");
    }

    #[test]
    fn test_format_address_short() {
        assert_eq!(format_address("0x1234", 6, 4), "0x1234");
        assert_eq!(format_address("abc", 4, 4), "abc");
    }

    #[test]
    fn test_truncate_address() {
        let addr = "0x5FbDB2315678afecb367f032d93F642f64180aa3";
        assert_eq!(truncate_address(addr), "0x5FbD...0aa3");
    }
}
