use windows as Windows;
use Windows::core::{Interface, BSTR, IUnknown, VARIANT};
use Windows::Win32::System::Com::IDispatch;

use crate::{Error, Result};

mod dispatch;

pub use self::dispatch::Dispatch;

pub fn variant_to_i32(value: &VARIANT) -> Result<i32> {
    i32::try_from(value).map_err(Error::from)
}

pub fn variant_to_u32(value: &VARIANT) -> Result<u32> {
    let value = variant_to_i32(value)?;
    u32::try_from(value).map_err(|_| Error::Engine(format!("unexpected negative value {value}")))
}

pub fn variant_to_bool(value: &VARIANT) -> Result<bool> {
    bool::try_from(value).map_err(Error::from)
}

/// Converts a string variant. Empty and null variants yield an empty string.
pub fn variant_to_string(value: &VARIANT) -> Result<String> {
    if value.is_empty() {
        return Ok(String::new());
    }
    BSTR::try_from(value).map(|s| s.to_string()).map_err(Error::from)
}

pub fn variant_to_dispatch(value: &VARIANT) -> Result<Dispatch> {
    let unknown = IUnknown::try_from(value)?;
    Ok(Dispatch::new(unknown.cast::<IDispatch>()?))
}
