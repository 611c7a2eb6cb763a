/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::error::Error;
use std::fmt;

use crate::builtin::VariantType;
use crate::meta::error::ConvertError;
use crate::meta::CallContext;
use crate::sys;

/// Error capable of representing failed function calls.
///
/// Returned by _varcall_ functions such as [`Object::try_call()`](crate::classes::Object::try_call). Varcall refers to the
/// "variant call" calling convention, where arguments and return values are passed as `Variant`, as opposed to _ptrcall_,
/// which passes direct pointers to the values.
///
/// # Possible error causes
/// - **Invalid method**: the method does not exist on the object.
/// - **Failed argument conversion**: an argument cannot be converted to the declared parameter type.
/// - **Failed return value conversion**: the returned value cannot be converted to the expected Rust type.
/// - **Too many or too few arguments**: the argument count does not match the parameter count.
pub struct CallError {
    // Boxed to keep `Result<T, CallError>` small.
    b: Box<InnerCallError>,
}

#[derive(Debug)]
struct InnerCallError {
    class_name: String,
    function_name: String,
    reason: String,
    source: Option<ConvertError>,
}

impl CallError {
    /// Name of the class the function belongs to.
    pub fn class_name(&self) -> &str {
        &self.b.class_name
    }

    /// Name of the function or method that failed.
    pub fn method_name(&self) -> &str {
        &self.b.function_name
    }

    /// Human-readable reason, without the call context.
    pub fn reason(&self) -> &str {
        &self.b.reason
    }

    pub(crate) fn failed_return_conversion<R>(call_ctx: &CallContext, source: ConvertError) -> Self {
        let return_ty = std::any::type_name::<R>();
        Self::new(call_ctx, format!("return value {return_ty} conversion"), Some(source))
    }

    /// Translates the error reported by `object_method_bind_call`.
    ///
    /// `arg_types` are the types of the arguments in the frame, in order.
    pub(crate) fn from_sys(call_ctx: &CallContext, err: sys::GDExtensionCallError, arg_types: &[VariantType]) -> Self {
        debug_assert_ne!(err.error, sys::GDEXTENSION_CALL_OK);

        let sys::GDExtensionCallError {
            error,
            argument,
            expected,
        } = err;

        let reason = match error {
            sys::GDEXTENSION_CALL_ERROR_INVALID_METHOD => "method not found".to_string(),
            sys::GDEXTENSION_CALL_ERROR_INVALID_ARGUMENT => {
                let to = VariantType::from_sys(expected as sys::GDExtensionVariantType);
                let from = usize::try_from(argument)
                    .ok()
                    .and_then(|index| arg_types.get(index).copied());

                match from {
                    Some(from) => format!("parameter #{} -- cannot convert from {from:?} to {to:?}", argument + 1),
                    None => format!("parameter #{} -- cannot convert to {to:?}", argument + 1),
                }
            }
            sys::GDEXTENSION_CALL_ERROR_TOO_MANY_ARGUMENTS | sys::GDEXTENSION_CALL_ERROR_TOO_FEW_ARGUMENTS => {
                let arg_count = arg_types.len();
                format!(
                    "function has {expected} parameter{}, but received {arg_count} argument{}",
                    plural(expected as usize),
                    plural(arg_count)
                )
            }
            sys::GDEXTENSION_CALL_ERROR_INSTANCE_IS_NULL => "instance is null".to_string(),
            sys::GDEXTENSION_CALL_ERROR_METHOD_NOT_CONST => "method is not const".to_string(),
            _ => format!("unknown reason (error code {error})"),
        };

        Self::new(call_ctx, reason, None)
    }

    fn new(call_ctx: &CallContext, reason: impl Into<String>, source: Option<ConvertError>) -> Self {
        let inner = InnerCallError {
            class_name: call_ctx.class_name.to_string(),
            function_name: call_ctx.function_name.to_string(),
            reason: reason.into(),
            source,
        };

        Self { b: Box::new(inner) }
    }
}

impl fmt::Display for CallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "function call failed: {}::{}()\n    Reason: {}",
            self.b.class_name, self.b.function_name, self.b.reason
        )?;

        if let Some(source) = &self.b.source {
            write!(f, "\n  Source: {source}")?;
        }

        Ok(())
    }
}

impl fmt::Debug for CallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.b)
    }
}

impl Error for CallError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.b.source.as_ref().map(|e| e as &(dyn Error + 'static))
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
