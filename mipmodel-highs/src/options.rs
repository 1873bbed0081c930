//! Option validation against the HiGHS option table.
//!
//! The `highs` crate panics when HiGHS rejects an option, so every option is first applied to a
//! scratch HiGHS instance. Only options that HiGHS accepts there are buffered for the solve.
#![allow(unsafe_code)]

use std::ffi::CString;
use std::os::raw::c_void;

use crate::HighsError;

#[derive(Clone,Debug,PartialEq)]
pub(crate) enum OptionValue {
    Bool(bool),
    Int(i32),
    Float(f64),
    Str(String)
}

impl OptionValue {
    fn kind(&self) -> OptionKind {
        match self {
            OptionValue::Bool(_)  => OptionKind::Bool,
            OptionValue::Int(_)   => OptionKind::Int,
            OptionValue::Float(_) => OptionKind::Double,
            OptionValue::Str(_)   => OptionKind::Str,
        }
    }
}

/// Value type of a HiGHS option, as reported by `Highs_getOptionType`.
#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub(crate) enum OptionKind {
    Bool,
    Int,
    Double,
    Str
}

impl OptionKind {
    fn from_raw(kind : highs_sys::HighsInt) -> Option<OptionKind> {
        match kind {
            0 => Some(OptionKind::Bool),
            1 => Some(OptionKind::Int),
            2 => Some(OptionKind::Double),
            3 => Some(OptionKind::Str),
            _ => None
        }
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            OptionKind::Bool   => "bool",
            OptionKind::Int    => "int",
            OptionKind::Double => "double",
            OptionKind::Str    => "string",
        }
    }
}

/// A HiGHS instance used only for option checks. Destroyed on drop.
struct Scratch(*mut c_void);

impl Scratch {
    fn new() -> Option<Scratch> {
        let ptr = unsafe { highs_sys::Highs_create() };
        if ptr.is_null() {
            return None;
        }
        let scratch = Scratch(ptr);
        // unknown option names are otherwise reported on the console
        let flag = c"output_flag";
        unsafe { highs_sys::Highs_setBoolOptionValue(scratch.0, flag.as_ptr(), 0) };
        Some(scratch)
    }

    fn option_kind(&self, name : &CString) -> Option<OptionKind> {
        let mut kind : highs_sys::HighsInt = -1;
        let status = unsafe { highs_sys::Highs_getOptionType(self.0, name.as_ptr(), &raw mut kind) };
        if status == highs_sys::STATUS_ERROR {
            return None;
        }
        OptionKind::from_raw(kind)
    }

    fn apply(&mut self, name : &CString, value : &OptionValue) -> bool {
        let status = match value {
            OptionValue::Bool(v) => unsafe {
                highs_sys::Highs_setBoolOptionValue(self.0, name.as_ptr(), *v as highs_sys::HighsInt)
            },
            OptionValue::Int(v) => unsafe {
                highs_sys::Highs_setIntOptionValue(self.0, name.as_ptr(), *v as highs_sys::HighsInt)
            },
            OptionValue::Float(v) => unsafe {
                highs_sys::Highs_setDoubleOptionValue(self.0, name.as_ptr(), *v)
            },
            OptionValue::Str(v) => {
                let Ok(c_value) = CString::new(v.as_str()) else { return false };
                unsafe { highs_sys::Highs_setStringOptionValue(self.0, name.as_ptr(), c_value.as_ptr()) }
            },
        };
        status != highs_sys::STATUS_ERROR
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        unsafe { highs_sys::Highs_destroy(self.0) }
    }
}

/// Check that HiGHS accepts `value` for the option `name`.
///
/// An integer value for an option of type double is converted. Any other mismatch between the
/// value type and the option type is an error.
///
/// # Returns
/// The value to pass to HiGHS, or
/// - [HighsError::InvalidOptionName] if HiGHS has no option `name`,
/// - [HighsError::InvalidOptionValue] if the value has the wrong type or is out of range.
pub(crate) fn validate(name : &str, value : OptionValue) -> Result<OptionValue,HighsError> {
    let invalid_name = || HighsError::InvalidOptionName{ name : name.to_string() };
    let c_name = CString::new(name).map_err(|_| invalid_name())?;
    if name.is_empty() {
        return Err(invalid_name());
    }
    let mut scratch = Scratch::new().ok_or_else(invalid_name)?;
    let kind = scratch.option_kind(&c_name).ok_or_else(invalid_name)?;

    let value = match (kind,value) {
        (OptionKind::Double,OptionValue::Int(v)) => OptionValue::Float(f64::from(v)),
        (_,value) => value
    };
    if value.kind() != kind || ! scratch.apply(&c_name, &value) {
        return Err(HighsError::InvalidOptionValue{ name : name.to_string(), expected : kind.name(), value : format!("{:?}",value) });
    }
    Ok(value)
}
