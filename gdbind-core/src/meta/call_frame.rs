/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Argument buffer for a single call into the engine.
//!
//! A frame owns the FFI storage of every argument, so the pointers in the argument array stay valid until the call returns.
//! All dispatch methods take the frame by value: once a call has been made, the frame is gone and its storage released.
//!
//! ```no_run
//! # use gdbind_core::meta::{CallContext, CallFrame};
//! # use gdbind_core::sys;
//! # fn demo(bind: sys::ClassMethodBind, object: sys::GDExtensionObjectPtr) {
//! let mut frame = CallFrame::new(CallContext::outbound("Light2D", "set_energy"));
//! frame.arg(&2.0f32);
//! unsafe { frame.ptrcall::<()>(bind, object) };
//! # }
//! ```

use std::ffi::c_int;

use crate::builtin::{Variant, VariantType};
use crate::meta::error::CallError;
use crate::meta::traits::GodotFfiVariant;
use crate::meta::{CallContext, FromGodot, GodotConvert, GodotType, ToGodot};
use crate::sys::{self, GodotFfi};

/// Storage of one argument, type-erased.
trait FrameArg {
    fn arg_ptr(&self) -> sys::GDExtensionConstTypePtr;
    fn to_variant(&self) -> Variant;
}

impl<T: GodotFfiVariant> FrameArg for T {
    fn arg_ptr(&self) -> sys::GDExtensionConstTypePtr {
        self.as_arg_ptr()
    }

    fn to_variant(&self) -> Variant {
        self.ffi_to_variant()
    }
}

type ReturnFfi<R> = <<R as GodotConvert>::Via as GodotType>::Ffi;

/// Argument slots for one outbound call, filled in the engine's parameter order.
///
/// A frame cannot be reused. Appending after it was freed does not compile:
///
/// ```compile_fail,E0382
/// # use gdbind_core::meta::{CallContext, CallFrame};
/// let mut frame = CallFrame::new(CallContext::outbound("Light2D", "set_energy"));
/// frame.free();
/// frame.arg(&1.0f32);
/// ```
///
/// Neither does appending after a call:
///
/// ```compile_fail,E0382
/// # use gdbind_core::meta::{CallContext, CallFrame};
/// # use gdbind_core::sys;
/// # fn demo(bind: sys::ClassMethodBind, object: sys::GDExtensionObjectPtr) {
/// let mut frame = CallFrame::new(CallContext::outbound("Light2D", "set_energy"));
/// frame.arg(&2.0f32);
/// unsafe { frame.ptrcall::<()>(bind, object) };
/// frame.arg(&3.0f32);
/// # }
/// ```
pub struct CallFrame {
    call_ctx: CallContext,
    // Boxed so that every slot keeps its address while more arguments are pushed.
    args: Vec<Box<dyn FrameArg>>,
}

impl CallFrame {
    /// Creates an empty frame for the call described by `call_ctx`.
    pub fn new(call_ctx: CallContext) -> Self {
        Self::with_capacity(call_ctx, 0)
    }

    /// Creates an empty frame with room for `arg_count` arguments.
    pub fn with_capacity(call_ctx: CallContext, arg_count: usize) -> Self {
        Self {
            call_ctx,
            args: Vec::with_capacity(arg_count),
        }
    }

    /// Appends one argument, converted to its engine representation.
    ///
    /// Arguments must be appended in exactly the order of the native parameters.
    pub fn arg<A: ToGodot>(&mut self, value: &A) -> &mut Self {
        let ffi = value.to_godot().into_ffi();
        self.args.push(Box::new(ffi));
        self
    }

    /// Number of arguments appended so far.
    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn call_context(&self) -> &CallContext {
        &self.call_ctx
    }

    /// Releases the frame without calling anything.
    pub fn free(self) {}

    /// Calls an engine class method with the ptrcall convention and reads the result as `R`.
    ///
    /// The return slot is reserved as `R`'s FFI storage before the call.
    ///
    /// # Panics
    /// If the returned value cannot be represented as `R` (e.g. a null object for a non-optional `Gd<T>`).
    ///
    /// # Safety
    /// `method_bind` must belong to the class of `object_ptr`, and the appended arguments and `R` must match its signature.
    pub unsafe fn ptrcall<R: FromGodot>(self, method_bind: sys::ClassMethodBind, object_ptr: sys::GDExtensionObjectPtr) -> R {
        let ptrcall_fn = sys::interface_fn!(object_method_bind_ptrcall);
        let arg_ptrs = self.arg_ptrs();

        let ffi = <ReturnFfi<R> as GodotFfi>::new_with_uninit(|return_ptr| {
            ptrcall_fn(method_bind.0, object_ptr, arg_ptrs.as_ptr(), return_ptr);
        });

        self.read_return(ffi)
    }

    /// Calls a method of a builtin type; `base` is the value the method is called on.
    ///
    /// # Safety
    /// `base` must point to a value of the builtin type that `method` belongs to, and the arguments and `R` must match.
    pub unsafe fn builtin_ptrcall<R: FromGodot>(self, method: sys::BuiltinMethodBind, base: sys::GDExtensionTypePtr) -> R {
        let arg_ptrs = self.arg_ptrs();

        let ffi = <ReturnFfi<R> as GodotFfi>::new_with_uninit(|return_ptr| {
            method(base, arg_ptrs.as_ptr(), return_ptr, arg_ptrs.len() as c_int);
        });

        self.read_return(ffi)
    }

    /// Calls a global utility function.
    ///
    /// # Safety
    /// The arguments and `R` must match the function's signature.
    pub unsafe fn utility_ptrcall<R: FromGodot>(self, function: sys::UtilityFunctionBind) -> R {
        let arg_ptrs = self.arg_ptrs();

        let ffi = <ReturnFfi<R> as GodotFfi>::new_with_uninit(|return_ptr| {
            function(return_ptr, arg_ptrs.as_ptr(), arg_ptrs.len() as c_int);
        });

        self.read_return(ffi)
    }

    /// Calls an engine class method with the varcall convention.
    ///
    /// Every argument is passed as a `Variant`; the engine checks count and types, and reports mismatches as [`CallError`].
    ///
    /// # Safety
    /// `method_bind` must belong to the class of `object_ptr`.
    pub unsafe fn varcall(
        self,
        method_bind: sys::ClassMethodBind,
        object_ptr: sys::GDExtensionObjectPtr,
    ) -> Result<Variant, CallError> {
        let call_fn = sys::interface_fn!(object_method_bind_call);

        let variants: Vec<Variant> = self.args.iter().map(|arg| arg.to_variant()).collect();
        let variant_ptrs: Vec<sys::GDExtensionConstVariantPtr> = variants.iter().map(Variant::var_sys).collect();

        let mut err = sys::default_call_error();
        let result = Variant::new_with_var_uninit(|return_ptr| {
            call_fn(
                method_bind.0,
                object_ptr,
                variant_ptrs.as_ptr(),
                variant_ptrs.len() as sys::GDExtensionInt,
                return_ptr,
                std::ptr::addr_of_mut!(err),
            );
        });

        if err.error != sys::GDEXTENSION_CALL_OK {
            let arg_types: Vec<VariantType> = variants.iter().map(Variant::get_type).collect();
            return Err(CallError::from_sys(&self.call_ctx, err, &arg_types));
        }

        Ok(result)
    }

    fn arg_ptrs(&self) -> Vec<sys::GDExtensionConstTypePtr> {
        self.args.iter().map(|arg| arg.arg_ptr()).collect()
    }

    fn read_return<R: FromGodot>(&self, ffi: ReturnFfi<R>) -> R {
        let result = <R::Via as GodotType>::try_from_ffi(ffi).and_then(R::try_from_godot);

        match result {
            Ok(value) => value,
            Err(err) => panic!("{}", CallError::failed_return_conversion::<R>(&self.call_ctx, err)),
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
