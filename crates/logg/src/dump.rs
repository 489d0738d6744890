//! crates/logg/src/dump.rs
//! Value rendering for `log_variable!`.
//!
//! Raw pointers are printed as addresses and never dereferenced; every other
//! value uses its `Display` implementation. The choice is made at compile time
//! through method resolution: [`DumpAddress`] is implemented on [`Dump`] itself
//! and therefore wins over [`DumpDisplay`], which is implemented on `&Dump`.

use std::fmt::{Display, Write as _};

use crate::format::render_address;

/// Borrowed value awaiting rendering.
pub struct Dump<'a, T: ?Sized>(pub &'a T);

/// Renders raw pointers as `0x`-prefixed, zero-padded addresses.
pub trait DumpAddress {
    /// Renders the wrapped value.
    fn render(&self) -> String;
}

impl<T: ?Sized> DumpAddress for Dump<'_, *const T> {
    fn render(&self) -> String {
        render_address(self.0.addr())
    }
}

impl<T: ?Sized> DumpAddress for Dump<'_, *mut T> {
    fn render(&self) -> String {
        render_address(self.0.addr())
    }
}

/// Renders any displayable value.
pub trait DumpDisplay {
    /// Renders the wrapped value.
    fn render(&self) -> String;
}

impl<T: Display + ?Sized> DumpDisplay for &Dump<'_, T> {
    fn render(&self) -> String {
        let mut rendered = String::new();
        // A failing Display impl leaves whatever it wrote so far.
        let _ = write!(rendered, "{}", self.0);
        rendered
    }
}

#[cfg(test)]
mod tests {
    use std::fmt;

    use super::*;

    #[test]
    fn displayable_values_use_display() {
        assert_eq!((&Dump(&1234_i32)).render(), "1234");
        assert_eq!((&Dump("text")).render(), "text");
        assert_eq!((&Dump(&String::from("owned"))).render(), "owned");
    }

    struct Partial;

    impl Display for Partial {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("half")?;
            Err(fmt::Error)
        }
    }

    #[test]
    fn failing_display_keeps_partial_output() {
        assert_eq!((&Dump(&Partial)).render(), "half");
    }

    #[test]
    fn const_pointers_render_as_addresses() {
        let pointer = std::ptr::without_provenance::<u64>(0x1000);
        assert_eq!((&Dump(&pointer)).render(), "0x00001000");
    }

    #[test]
    fn mut_pointers_render_as_addresses() {
        let pointer = std::ptr::without_provenance_mut::<u8>(0xdead_beef);
        assert_eq!((&Dump(&pointer)).render(), "0xdeadbeef");
    }

    #[test]
    fn null_pointer_is_not_dereferenced() {
        let pointer: *const i32 = std::ptr::null();
        assert_eq!((&Dump(&pointer)).render(), "0x00000000");
    }

    #[test]
    fn unsized_pointers_render_data_address() {
        let values = [1u8, 2, 3];
        let slice: *const [u8] = &values[..];
        let expected = render_address(values.as_ptr().addr());
        assert_eq!((&Dump(&slice)).render(), expected);
    }
}
