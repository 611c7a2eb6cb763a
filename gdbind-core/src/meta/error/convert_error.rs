/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::error::Error;
use std::fmt;

use crate::builtin::{Variant, VariantType};
use crate::meta::{ClassName, ToGodot};

/// Represents errors that can occur when converting values from the engine.
///
/// Carries the value that failed to convert, if it is available as a [`Variant`].
#[derive(Debug)]
pub struct ConvertError {
    kind: ErrorKind,
    value: Option<Variant>,
}

impl ConvertError {
    /// Create a new custom error for a conversion.
    pub fn new(user_message: impl Into<String>) -> Self {
        Self::with_kind(ErrorKind::Custom(Some(user_message.into().into())))
    }

    pub(crate) fn with_kind(kind: ErrorKind) -> Self {
        Self { kind, value: None }
    }

    /// Create a new error for a conversion with the value that failed to convert.
    pub(crate) fn with_kind_value<V>(kind: ErrorKind, value: V) -> Self
    where
        V: ToGodot,
    {
        Self {
            kind,
            value: Some(value.to_variant()),
        }
    }

    /// Create a new custom error wrapping an [`Error`].
    pub fn with_error<E>(error: E) -> Self
    where
        E: Into<Box<dyn Error + Send + Sync>>,
    {
        Self::with_kind(ErrorKind::Custom(Some(error.into())))
    }

    /// Create a new custom error wrapping an [`Error`] and the value that failed to convert.
    pub fn with_error_value<E, V>(error: E, value: V) -> Self
    where
        E: Into<Box<dyn Error + Send + Sync>>,
        V: ToGodot,
    {
        Self::with_kind_value(ErrorKind::Custom(Some(error.into())), value)
    }

    /// What went wrong.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Returns the rust-error that caused this error, if one exists.
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        match &self.kind {
            ErrorKind::Custom(Some(cause)) => Some(&**cause),
            _ => None,
        }
    }

    /// Returns a reference of the value that failed to convert, if one exists.
    pub fn value(&self) -> Option<&Variant> {
        self.value.as_ref()
    }

    /// Converts error into generic error type. It is useful to send error across thread.
    /// Do note that some data might get lost during conversion.
    pub fn into_erased(self) -> impl Error + Send + Sync {
        ErasedConvertError::from(self)
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        if let Some(value) = &self.value {
            write!(f, ": {value:?}")?;
        }

        Ok(())
    }
}

impl Error for ConvertError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause().map(|v| v as &(dyn Error + 'static))
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

/// The reason a conversion failed.
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The variant holds a different type than requested.
    BadType {
        expected: VariantType,
        actual: VariantType,
    },

    /// An integer does not fit into the requested Rust type.
    IntOutOfRange { target: &'static str, value: i64 },

    /// An ordinal does not name any enumerator of the requested engine enum.
    UnknownEnumerator { enum_name: &'static str, ord: i64 },

    /// A typed array holds elements of a different type.
    BadElementType {
        expected: VariantType,
        actual: VariantType,
    },

    /// A typed array holds objects of a different class.
    BadElementClass { expected: ClassName, actual: String },

    /// A non-nullable object handle received null.
    NullObject,

    /// The object is alive, but not an instance of the requested class.
    WrongClass { expected: ClassName, actual: String },

    /// An object handle refers to an object that no longer exists.
    DeadObject,

    /// User-defined error.
    Custom(Option<Box<dyn Error + Send + Sync>>),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadType { expected, actual } => write!(f, "expected type `{expected:?}`, got `{actual:?}`"),
            Self::IntOutOfRange { target, value } => write!(f, "integer {value} does not fit into `{target}`"),
            Self::UnknownEnumerator { enum_name, ord } => write!(f, "`{enum_name}` has no enumerator with ordinal {ord}"),
            Self::BadElementType { expected, actual } => {
                write!(f, "expected array of `{expected:?}`, got array of `{actual:?}`")
            }
            Self::BadElementClass { expected, actual } => {
                write!(f, "expected array of class `{expected}`, got array of class `{actual}`")
            }
            Self::NullObject => write!(f, "`Gd` cannot be null"),
            Self::WrongClass { expected, actual } => write!(f, "expected class `{expected}`, got `{actual}`"),
            Self::DeadObject => write!(f, "object has been destroyed"),
            Self::Custom(Some(cause)) => write!(f, "{cause}"),
            Self::Custom(None) => write!(f, "custom error"),
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

/// Erased type of [`ConvertError`].
#[derive(Debug)]
pub(crate) struct ErasedConvertError {
    message: String,
}

impl From<ConvertError> for ErasedConvertError {
    fn from(v: ConvertError) -> Self {
        Self { message: v.to_string() }
    }
}

impl fmt::Display for ErasedConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for ErasedConvertError {}

// ----------------------------------------------------------------------------------------------------------------------------------------------
