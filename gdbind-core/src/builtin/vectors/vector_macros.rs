/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#![macro_use]

/// Implements component-wise arithmetic operators, between two vectors or between a vector and a scalar.
macro_rules! impl_vector_operators {
    (
        // Name of the vector type.
        $Vector:ty,
        // Type of each individual component, for example `i32`.
        $Scalar:ty,
        // Names of the components, with parentheses, for example `(x, y)`.
        ($($components:ident),*)
    ) => {
        impl_vector_operators!(@vector $Vector, ($($components),*), Add, add, AddAssign, add_assign);
        impl_vector_operators!(@vector $Vector, ($($components),*), Sub, sub, SubAssign, sub_assign);
        impl_vector_operators!(@vector $Vector, ($($components),*), Mul, mul, MulAssign, mul_assign);
        impl_vector_operators!(@scalar $Vector, $Scalar, ($($components),*), Mul, mul, MulAssign, mul_assign);
        impl_vector_operators!(@scalar $Vector, $Scalar, ($($components),*), Div, div, DivAssign, div_assign);

        impl std::ops::Neg for $Vector {
            type Output = Self;

            fn neg(mut self) -> Self::Output {
                $( self.$components = -self.$components; )*
                self
            }
        }

        impl std::ops::Mul<$Vector> for $Scalar {
            type Output = $Vector;

            fn mul(self, rhs: $Vector) -> Self::Output {
                rhs * self
            }
        }
    };

    (@vector $Vector:ty, ($($components:ident),*), $Operator:ident, $func:ident, $AssignOperator:ident, $assign_func:ident) => {
        impl std::ops::$Operator for $Vector {
            type Output = Self;

            fn $func(mut self, rhs: $Vector) -> Self::Output {
                $( self.$components = std::ops::$Operator::$func(self.$components, rhs.$components); )*
                self
            }
        }

        impl std::ops::$AssignOperator for $Vector {
            fn $assign_func(&mut self, rhs: $Vector) {
                *self = std::ops::$Operator::$func(*self, rhs);
            }
        }
    };

    (@scalar $Vector:ty, $Scalar:ty, ($($components:ident),*), $Operator:ident, $func:ident, $AssignOperator:ident, $assign_func:ident) => {
        impl std::ops::$Operator<$Scalar> for $Vector {
            type Output = Self;

            fn $func(mut self, rhs: $Scalar) -> Self::Output {
                $( self.$components = std::ops::$Operator::$func(self.$components, rhs); )*
                self
            }
        }

        impl std::ops::$AssignOperator<$Scalar> for $Vector {
            fn $assign_func(&mut self, rhs: $Scalar) {
                *self = std::ops::$Operator::$func(*self, rhs);
            }
        }
    };
}

/// Constructors, glam conversions, FFI and formatting shared by all vector types.
macro_rules! impl_vector_fns {
    (
        // Name of the vector type.
        $Vector:ident,
        // Corresponding glam type, for example `glam::Vec2`.
        $GlamVector:ty,
        // Type of each individual component.
        $Scalar:ty,
        // Names of the components, with parentheses.
        ($($components:ident),*),
        // Variant type tag.
        $variant_type:ident
    ) => {
        impl $Vector {
            /// Vector with all components set to `0`.
            pub const ZERO: Self = Self::splat(0 as $Scalar);

            /// Vector with all components set to `1`.
            pub const ONE: Self = Self::splat(1 as $Scalar);

            /// Creates a vector with the given components.
            #[inline]
            pub const fn new($($components: $Scalar),*) -> Self {
                Self { $($components),* }
            }

            /// Creates a vector with all components set to `value`.
            #[inline]
            pub const fn splat(value: $Scalar) -> Self {
                Self { $($components: value),* }
            }

            /// Returns a new vector with all components in absolute values.
            #[inline]
            pub fn abs(self) -> Self {
                Self::from_glam(self.to_glam().abs())
            }

            /// Component-wise minimum.
            #[inline]
            pub fn coord_min(self, other: Self) -> Self {
                Self::from_glam(self.to_glam().min(other.to_glam()))
            }

            /// Component-wise maximum.
            #[inline]
            pub fn coord_max(self, other: Self) -> Self {
                Self::from_glam(self.to_glam().max(other.to_glam()))
            }

            #[inline]
            pub fn from_glam(v: $GlamVector) -> Self {
                Self::new($(v.$components),*)
            }

            #[inline]
            pub fn to_glam(self) -> $GlamVector {
                <$GlamVector>::new($(self.$components),*)
            }
        }

        impl From<$GlamVector> for $Vector {
            fn from(v: $GlamVector) -> Self {
                Self::from_glam(v)
            }
        }

        impl From<$Vector> for $GlamVector {
            fn from(v: $Vector) -> Self {
                v.to_glam()
            }
        }

        impl std::fmt::Display for $Vector {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let components = [$(self.$components.to_string()),*];
                write!(f, "({})", components.join(", "))
            }
        }

        // SAFETY: the struct is `repr(C)` with the engine's component order and type.
        unsafe impl $crate::sys::GodotFfi for $Vector {
            fn variant_type() -> $crate::sys::VariantType {
                $crate::sys::VariantType::$variant_type
            }

            $crate::sys::ffi_methods! { type $crate::sys::GDExtensionTypePtr = *mut Self; }
        }
    };
}

/// Methods only available on float vectors.
macro_rules! impl_float_vector_fns {
    (
        $Vector:ty,
        ($($components:ident),*)
    ) => {
        impl $Vector {
            /// Returns the length (magnitude) of this vector.
            #[inline]
            pub fn length(self) -> f32 {
                self.to_glam().length()
            }

            /// Squared length; cheaper than [`length()`](Self::length) for comparisons.
            #[inline]
            pub fn length_squared(self) -> f32 {
                self.to_glam().length_squared()
            }

            /// Returns the vector scaled to unit length. A zero vector stays zero.
            #[inline]
            pub fn normalized(self) -> Self {
                Self::from_glam(self.to_glam().normalize_or_zero())
            }

            /// Returns `true` if the vector has length `1` within a small tolerance.
            #[inline]
            pub fn is_normalized(self) -> bool {
                self.to_glam().is_normalized()
            }

            #[inline]
            pub fn dot(self, with: Self) -> f32 {
                self.to_glam().dot(with.to_glam())
            }

            #[inline]
            pub fn distance_to(self, to: Self) -> f32 {
                (to - self).length()
            }

            /// Linear interpolation; `weight` of `0` yields `self`, `1` yields `to`.
            #[inline]
            pub fn lerp(self, to: Self, weight: f32) -> Self {
                Self::new($(self.$components + (to.$components - self.$components) * weight),*)
            }

            /// Returns `true` if all components are finite.
            #[inline]
            pub fn is_finite(self) -> bool {
                self.to_glam().is_finite()
            }

            /// Component-wise comparison with a tolerance.
            #[inline]
            pub fn is_equal_approx(self, to: Self) -> bool {
                $( is_equal_approx(self.$components, to.$components) )&&*
            }
        }
    };
}

/// Float comparison with the engine's tolerance: absolute near zero, relative elsewhere.
pub(crate) fn is_equal_approx(a: f32, b: f32) -> bool {
    const CMP_EPSILON: f32 = 0.00001;

    if a == b {
        return true;
    }

    let tolerance = (CMP_EPSILON * a.abs()).max(CMP_EPSILON);
    (a - b).abs() < tolerance
}
