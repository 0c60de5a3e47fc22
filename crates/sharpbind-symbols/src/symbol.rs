//! Symbol handles and the enums that classify them.

use serde::Serialize;
use std::fmt;

/// Opaque handle to a declared entity in the host's symbol table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SymbolId(pub u32);

impl SymbolId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Handle to an assembly (compilation unit).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct AssemblyId(pub u32);

impl AssemblyId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Handle to a source file, used for file-local types.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct FileId(pub u32);

/// Kind of a symbol.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum SymbolKind {
    NamedType,
    Method,
    Property,
    Event,
    Field,
    TypeParameter,
    Parameter,
    Local,
    Label,
    RangeVariable,
    Alias,
    Discard,
    Namespace,
    DynamicType,
    ArrayType,
    PointerType,
    FunctionPointerType,
    ErrorType,
    NetModule,
    Assembly,
    Preprocessing,
}

impl SymbolKind {
    /// Kinds that are members of a type and carry their own accessibility.
    pub const fn is_member(self) -> bool {
        matches!(
            self,
            Self::Method | Self::Property | Self::Event | Self::Field
        )
    }
}

/// Declared accessibility of a symbol.
///
/// Ordered from most to least restrictive, so `a < b` reads as
/// "`a` is more restrictive than `b`" for the linear part of the lattice.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Accessibility {
    NotApplicable,
    Private,
    ProtectedAndInternal,
    Protected,
    Internal,
    ProtectedOrInternal,
    Public,
}

impl fmt::Display for Accessibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::NotApplicable => "",
            Self::Private => "private",
            Self::ProtectedAndInternal => "private protected",
            Self::Protected => "protected",
            Self::Internal => "internal",
            Self::ProtectedOrInternal => "protected internal",
            Self::Public => "public",
        };
        f.write_str(text)
    }
}

/// Kind of a named type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum TypeKind {
    Class,
    Struct,
    Interface,
    Enum,
    Delegate,
    /// The implicit container of an interactive submission's top-level code.
    Submission,
    Error,
}
