use std::cell::RefCell;
use std::collections::HashMap;

use windows as Windows;
use Windows::core::{GUID, HSTRING, PCWSTR, VARIANT};
use Windows::Win32::System::Com::{
    CLSIDFromProgID, CoCreateInstance, IDispatch, CLSCTX_ALL, DISPATCH_FLAGS, DISPATCH_METHOD,
    DISPATCH_PROPERTYGET, DISPATCH_PROPERTYPUT, DISPPARAMS,
};
use Windows::Win32::System::Ole::DISPID_PROPERTYPUT;

use crate::Result;

const LOCALE_USER_DEFAULT: u32 = 0x0400;

/// A late-bound automation object. Member names are resolved to DISPIDs on first use and
/// cached.
pub struct Dispatch {
    intf: IDispatch,
    dispids: RefCell<HashMap<String, i32>>,
}

impl Dispatch {
    pub fn new(intf: IDispatch) -> Self {
        Self {
            intf,
            dispids: RefCell::new(HashMap::new()),
        }
    }

    /// Instantiates the automation object registered under `prog_id`.
    pub fn create(prog_id: &str) -> Result<Self> {
        let clsid = unsafe { CLSIDFromProgID(&HSTRING::from(prog_id)) }?;
        let intf: IDispatch = unsafe { CoCreateInstance(&clsid, None, CLSCTX_ALL) }?;
        Ok(Self::new(intf))
    }

    pub fn get(&self, name: &str) -> Result<VARIANT> {
        self.invoke(name, DISPATCH_PROPERTYGET, &mut [], false)
    }

    pub fn put(&self, name: &str, value: VARIANT) -> Result<()> {
        self.invoke(name, DISPATCH_PROPERTYPUT, &mut [value], true).map(|_| ())
    }

    /// Calls a method. `args` are given in declaration order.
    pub fn call(&self, name: &str, args: Vec<VARIANT>) -> Result<VARIANT> {
        let mut args = args;
        args.reverse();
        self.invoke(name, DISPATCH_METHOD | DISPATCH_PROPERTYGET, &mut args, false)
    }

    fn dispid(&self, name: &str) -> Result<i32> {
        if let Some(&id) = self.dispids.borrow().get(name) {
            return Ok(id);
        }
        let wide = HSTRING::from(name);
        let names = [PCWSTR(wide.as_ptr())];
        let mut id = 0;
        unsafe {
            self.intf.GetIDsOfNames(
                &GUID::zeroed(),
                names.as_ptr(),
                1,
                LOCALE_USER_DEFAULT,
                &mut id,
            )
        }?;
        self.dispids.borrow_mut().insert(name.to_owned(), id);
        Ok(id)
    }

    fn invoke(
        &self,
        name: &str,
        flags: DISPATCH_FLAGS,
        args: &mut [VARIANT],
        named_put: bool,
    ) -> Result<VARIANT> {
        let id = self.dispid(name)?;
        let mut put_id = DISPID_PROPERTYPUT;
        let named_args: *mut i32 = if named_put { &mut put_id } else { std::ptr::null_mut() };
        let params = DISPPARAMS {
            rgvarg: args.as_mut_ptr(),
            rgdispidNamedArgs: named_args,
            cArgs: args.len() as u32,
            cNamedArgs: u32::from(named_put),
        };
        let mut result = VARIANT::default();
        unsafe {
            self.intf.Invoke(
                id,
                &GUID::zeroed(),
                LOCALE_USER_DEFAULT,
                flags,
                &params,
                Some(&mut result),
                None,
                None,
            )
        }?;
        Ok(result)
    }
}
