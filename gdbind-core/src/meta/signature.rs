/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use crate::builtin::Variant;
use crate::meta::error::CallError;
use crate::meta::{CallFrame, FromGodot, ToGodot};
use crate::sys;

/// Tuple of call arguments, pushed into a [`CallFrame`] in order.
///
/// Implemented for tuples of up to 8 elements, each of which implements [`ToGodot`].
pub trait ParamTuple {
    /// Number of parameters.
    const LEN: usize;

    /// Appends all elements to the frame.
    fn push_args(&self, frame: &mut CallFrame);
}

macro_rules! impl_param_tuple {
    ($len:literal; $($P:ident : $idx:tt),*) => {
        impl<$($P: ToGodot),*> ParamTuple for ($($P,)*) {
            const LEN: usize = $len;

            #[allow(unused_variables)]
            fn push_args(&self, frame: &mut CallFrame) {
                $( frame.arg(&self.$idx); )*
            }
        }
    };
}

impl_param_tuple!(0;);
impl_param_tuple!(1; P0: 0);
impl_param_tuple!(2; P0: 0, P1: 1);
impl_param_tuple!(3; P0: 0, P1: 1, P2: 2);
impl_param_tuple!(4; P0: 0, P1: 1, P2: 2, P3: 3);
impl_param_tuple!(5; P0: 0, P1: 1, P2: 2, P3: 3, P4: 4);
impl_param_tuple!(6; P0: 0, P1: 1, P2: 2, P3: 3, P4: 4, P5: 5);
impl_param_tuple!(7; P0: 0, P1: 1, P2: 2, P3: 3, P4: 4, P5: 5, P6: 6);
impl_param_tuple!(8; P0: 0, P1: 1, P2: 2, P3: 3, P4: 4, P5: 5, P6: 6, P7: 7);

// ----------------------------------------------------------------------------------------------------------------------------------------------

/// Static signature of an outbound call: parameter tuple and return type.
///
/// Builds a [`CallFrame`] from the arguments, dispatches it and converts the result.
pub struct Signature<Params, Ret> {
    _p: PhantomData<Params>,
    _r: PhantomData<fn() -> Ret>,
}

impl<Params: ParamTuple, Ret: FromGodot> Signature<Params, Ret> {
    fn frame(call_ctx: CallContext, args: &Params) -> CallFrame {
        let mut frame = CallFrame::with_capacity(call_ctx, Params::LEN);
        args.push_args(&mut frame);
        frame
    }

    /// Calls an engine class method with the ptrcall convention.
    ///
    /// # Safety
    /// `method_bind` must belong to the class of `object_ptr` and have exactly the parameter and return types of this signature.
    pub unsafe fn out_class_ptrcall(
        method_bind: sys::ClassMethodBind,
        object_ptr: sys::GDExtensionObjectPtr,
        call_ctx: CallContext,
        args: Params,
    ) -> Ret {
        Self::frame(call_ctx, &args).ptrcall(method_bind, object_ptr)
    }

    /// Calls an engine class method with the varcall convention, where the engine checks the arguments.
    ///
    /// # Safety
    /// `method_bind` must belong to the class of `object_ptr`.
    pub unsafe fn out_class_varcall(
        method_bind: sys::ClassMethodBind,
        object_ptr: sys::GDExtensionObjectPtr,
        call_ctx: CallContext,
        args: Params,
    ) -> Result<Ret, CallError> {
        let frame = Self::frame(call_ctx.clone(), &args);
        let variant: Variant = frame.varcall(method_bind, object_ptr)?;

        Ret::try_from_variant(&variant).map_err(|err| CallError::failed_return_conversion::<Ret>(&call_ctx, err))
    }

    /// Calls a method of a builtin type.
    ///
    /// # Safety
    /// `base` must point to a value of the builtin type that `method` belongs to, and the method must have exactly the
    /// parameter and return types of this signature.
    pub unsafe fn out_builtin_ptrcall(
        method: sys::BuiltinMethodBind,
        base: sys::GDExtensionTypePtr,
        call_ctx: CallContext,
        args: Params,
    ) -> Ret {
        Self::frame(call_ctx, &args).builtin_ptrcall(method, base)
    }

    /// Calls a global utility function.
    ///
    /// # Safety
    /// The function must have exactly the parameter and return types of this signature.
    pub unsafe fn out_utility_ptrcall(
        function: sys::UtilityFunctionBind,
        call_ctx: CallContext,
        args: Params,
    ) -> Ret {
        Self::frame(call_ctx, &args).utility_ptrcall(function)
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

/// Information about the function being called, for error messages.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct CallContext {
    pub class_name: Cow<'static, str>,
    pub function_name: Cow<'static, str>,
}

impl CallContext {
    /// Call to an engine class method or a builtin method.
    pub const fn outbound(class_name: &'static str, function_name: &'static str) -> Self {
        Self {
            class_name: Cow::Borrowed(class_name),
            function_name: Cow::Borrowed(function_name),
        }
    }

    /// Call to a global utility function.
    pub const fn utility(function_name: &'static str) -> Self {
        Self::outbound("@GlobalScope", function_name)
    }

    /// Call whose method name is only known at runtime, e.g. `Object::call("name")`.
    pub fn dynamic(class_name: &'static str, function_name: impl Into<String>) -> Self {
        Self {
            class_name: Cow::Borrowed(class_name),
            function_name: Cow::Owned(function_name.into()),
        }
    }
}

impl fmt::Display for CallContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.class_name, self.function_name)
    }
}
