/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Declarative descriptions of engine classes and enums.
//!
//! Class and method names are passed through `stringify!`, so the Rust identifiers are exactly the engine's names.

/// Declares an engine enum as a newtype around its ordinal, with one associated constant per enumerator.
///
/// Ordinals that no enumerator names are still representable; they debug-print as `Enum(ord)`.
#[macro_export]
#[doc(hidden)]
macro_rules! engine_enum {
    (
        $( #[$attr:meta] )*
        pub enum $Enum:ident {
            $( $( #[$enumerator_attr:meta] )* $Enumerator:ident = $ord:literal, )*
        }
    ) => {
        $( #[$attr] )*
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
        #[repr(transparent)]
        pub struct $Enum {
            ord: i32,
        }

        impl $Enum {
            $(
                $( #[$enumerator_attr] )*
                pub const $Enumerator: $Enum = $Enum { ord: $ord };
            )*
        }

        impl $crate::obj::EngineEnum for $Enum {
            fn try_from_ord(ord: i32) -> Option<Self> {
                match ord {
                    $( $ord => Some(Self::$Enumerator), )*
                    _ => None,
                }
            }

            fn ord(self) -> i32 {
                self.ord
            }

            fn as_str(&self) -> &'static str {
                match self.ord {
                    $( $ord => stringify!($Enumerator), )*
                    _ => "",
                }
            }

            fn values() -> &'static [Self] {
                &[ $( Self::$Enumerator, )* ]
            }
        }

        impl std::fmt::Debug for $Enum {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match $crate::obj::EngineEnum::as_str(self) {
                    "" => write!(f, "{}({})", stringify!($Enum), self.ord),
                    name => f.write_str(name),
                }
            }
        }

        impl $crate::meta::GodotConvert for $Enum {
            type Via = i64;
        }

        impl $crate::meta::ToGodot for $Enum {
            fn to_godot(&self) -> Self::Via {
                self.ord as i64
            }
        }

        impl $crate::meta::FromGodot for $Enum {
            fn try_from_godot(via: Self::Via) -> Result<Self, $crate::meta::error::ConvertError> {
                i32::try_from(via)
                    .ok()
                    .and_then(<Self as $crate::obj::EngineEnum>::try_from_ord)
                    .ok_or_else(|| {
                        let kind = $crate::meta::error::ErrorKind::UnknownEnumerator {
                            enum_name: stringify!($Enum),
                            ord: via,
                        };
                        $crate::meta::error::ConvertError::with_kind(kind)
                    })
            }
        }
    };
}

/// Declares an engine class: the handle struct, its place in the hierarchy, memory strategy and construction.
///
/// ```ignore
/// engine_class! {
///     /// Docs.
///     pub struct PointLight2D: Light2D: Node2D: CanvasItem: Node: Object {
///         level: Scene,
///         memory: MemManual,
///         construct: alloc,
///     }
/// }
/// ```
///
/// The first name after the class is the direct base; the rest are further ancestors up to `Object`.
/// `construct` is one of `alloc` (manually managed), `gd` (ref-counted), `singleton` or `none` (abstract).
#[macro_export]
#[doc(hidden)]
macro_rules! engine_class {
    (@construct $Class:ident, alloc) => {
        impl $crate::obj::NewAlloc for $Class {
            fn new_alloc() -> $crate::obj::Gd<Self> {
                $crate::classes::construct_engine_object::<Self>()
            }
        }
    };
    (@construct $Class:ident, gd) => {
        impl $crate::obj::NewGd for $Class {
            fn new_gd() -> $crate::obj::Gd<Self> {
                $crate::classes::construct_engine_object::<Self>()
            }
        }
    };
    (@construct $Class:ident, singleton) => {
        impl $crate::obj::Singleton for $Class {
            fn singleton() -> $crate::obj::Gd<Self> {
                $crate::classes::singleton_unchecked::<Self>()
            }
        }
    };
    (@construct $Class:ident, none) => {};

    (
        $( #[$attr:meta] )*
        pub struct $Class:ident: $Base:ident $( : $Ancestor:ident )* {
            level: $Level:ident,
            memory: $Memory:ident,
            construct: $construct:ident,
        }
    ) => {
        $( #[$attr] )*
        #[repr(C)]
        pub struct $Class {
            object_ptr: $crate::sys::GDExtensionObjectPtr,
            instance_id: Option<$crate::obj::InstanceId>,
        }

        $crate::sys::static_assert_eq_size!($Class, $crate::obj::RawGd<$Class>);

        impl $Class {
            /// # Safety
            /// `object_ptr` must point to a live instance of this class, identified by `instance_id`.
            #[doc(hidden)]
            pub unsafe fn __from_object_ptr(
                object_ptr: $crate::sys::GDExtensionObjectPtr,
                instance_id: Option<$crate::obj::InstanceId>,
            ) -> Self {
                Self { object_ptr, instance_id }
            }
        }

        impl $crate::obj::GodotClass for $Class {
            type Base = $crate::classes::$Base;

            const INIT_LEVEL: $crate::sys::InitLevel = $crate::sys::InitLevel::$Level;

            fn class_name() -> $crate::meta::ClassName {
                $crate::meta::ClassName::new_static(stringify!($Class))
            }
        }

        // SAFETY: memory strategy matches the engine's class hierarchy.
        unsafe impl $crate::obj::Bounds for $Class {
            type Memory = $crate::obj::bounds::$Memory;
            type DynMemory = $crate::obj::bounds::$Memory;
        }

        impl $crate::obj::EngineClass for $Class {
            fn as_object_ptr(&self) -> $crate::sys::GDExtensionObjectPtr {
                self.object_ptr
            }

            fn as_type_ptr(&self) -> $crate::sys::GDExtensionTypePtr {
                std::ptr::addr_of!(self.object_ptr) as $crate::sys::GDExtensionTypePtr
            }
        }

        // SAFETY: single inheritance; the same object pointer is valid for every ancestor.
        unsafe impl $crate::obj::Inherits<$crate::classes::$Base> for $Class {}
        $(
            // SAFETY: see above.
            unsafe impl $crate::obj::Inherits<$crate::classes::$Ancestor> for $Class {}
        )*

        impl std::ops::Deref for $Class {
            type Target = $crate::classes::$Base;

            fn deref(&self) -> &Self::Target {
                // SAFETY: all engine classes share one layout, and the base accepts the same object pointer.
                unsafe { &*(self as *const Self).cast::<Self::Target>() }
            }
        }

        impl std::ops::DerefMut for $Class {
            fn deref_mut(&mut self) -> &mut Self::Target {
                // SAFETY: see `Deref`.
                unsafe { &mut *(self as *mut Self).cast::<Self::Target>() }
            }
        }

        impl std::fmt::Debug for $Class {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($Class))
                    .field("instance_id", &self.instance_id)
                    .finish()
            }
        }

        $crate::engine_class!(@construct $Class, $construct);
    };
}

/// Declares the ptrcall methods of an engine class, together with the keys to resolve their binds.
///
/// Each method is written as `fn name(&self, param: Type, ...) -> Ret = hash;` (or `&mut self`); the hash is the engine's
/// hash of the method signature.
#[macro_export]
#[doc(hidden)]
macro_rules! engine_methods {
    (@ret) => { () };
    (@ret $Ret:ty) => { $Ret };

    (@method $Class:ident;
        $( #[$attr:meta] )*
        fn $method:ident(&mut self $(, $param:ident: $ParamTy:ty )* $(,)?) $( -> $Ret:ty )? = $hash:literal;
    ) => {
        $( #[$attr] )*
        pub fn $method(&mut self $(, $param: $ParamTy )*) $( -> $Ret )? {
            $crate::engine_methods!(@body $Class, $method, $hash, self.object_ptr; $( $param: $ParamTy ),*; $($Ret)?)
        }
    };
    (@method $Class:ident;
        $( #[$attr:meta] )*
        fn $method:ident(&self $(, $param:ident: $ParamTy:ty )* $(,)?) $( -> $Ret:ty )? = $hash:literal;
    ) => {
        $( #[$attr] )*
        pub fn $method(&self $(, $param: $ParamTy )*) $( -> $Ret )? {
            $crate::engine_methods!(@body $Class, $method, $hash, self.object_ptr; $( $param: $ParamTy ),*; $($Ret)?)
        }
    };

    (@body $Class:ident, $method:ident, $hash:literal, $object_ptr:expr; $( $param:ident: $ParamTy:ty ),*; $($Ret:ty)?) => {{
        const KEY: $crate::sys::ClassMethodKey = $crate::sys::ClassMethodKey {
            class_name: stringify!($Class),
            method_name: stringify!($method),
            hash: $hash,
        };

        let method_bind = $crate::sys::class_method(&KEY);
        let call_ctx = $crate::meta::CallContext::outbound(stringify!($Class), stringify!($method));

        // SAFETY: the bind was resolved for this class, and the declared signature matches the engine's.
        unsafe {
            $crate::meta::Signature::<( $( $ParamTy, )* ), $crate::engine_methods!(@ret $($Ret)?)>::out_class_ptrcall(
                method_bind,
                $object_ptr,
                call_ctx,
                ( $( $param, )* ),
            )
        }
    }};

    (
        impl $Class:ident {
            $(
                $( #[$attr:meta] )*
                fn $method:ident( $($receiver_and_params:tt)* ) $( -> $Ret:ty )? = $hash:literal;
            )*
        }
    ) => {
        impl $Class {
            /// Keys of all ptrcall methods declared for this class.
            pub(crate) const METHOD_KEYS: &'static [$crate::sys::ClassMethodKey] = &[
                $(
                    $crate::sys::ClassMethodKey {
                        class_name: stringify!($Class),
                        method_name: stringify!($method),
                        hash: $hash,
                    },
                )*
            ];

            $(
                $crate::engine_methods!(@method $Class;
                    $( #[$attr] )*
                    fn $method( $($receiver_and_params)* ) $( -> $Ret )? = $hash;
                );
            )*
        }
    };
}
