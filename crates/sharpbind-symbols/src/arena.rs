//! `SymbolArena`: a flat, index-addressed symbol table.
//!
//! This is the reference host implementation of [`SymbolGraph`]. Embedders
//! with their own symbol table implement the trait directly; tests and small
//! hosts build an arena with the declaration helpers below.
//!
//! Constructed generics are separate symbols whose `original_definition`
//! points back at the generic definition. Members of a constructed type are
//! likewise separate symbols created with [`SymbolArena::member_of`].

use crate::assembly::{AssemblyData, AssemblyTable, TrustPolicy};
use crate::graph::{BasesBeingResolved, SymbolGraph};
use crate::symbol::{Accessibility, AssemblyId, FileId, SymbolId, SymbolKind, TypeKind};
use sharpbind_common::UseSiteDiagnostics;
use sharpbind_common::diagnostics::diagnostic_messages;
use smallvec::SmallVec;
use tracing::trace;

/// Stored data for one symbol.
#[derive(Clone, Debug)]
pub struct SymbolData {
    pub name: String,
    pub kind: SymbolKind,
    pub accessibility: Accessibility,
    pub containing_type: Option<SymbolId>,
    pub containing_assembly: Option<AssemblyId>,
    pub is_static: bool,
    pub original_definition: SymbolId,
    pub type_kind: Option<TypeKind>,
    pub type_arguments: SmallVec<[SymbolId; 2]>,
    pub element_type: Option<SymbolId>,
    pub signature_types: SmallVec<[SymbolId; 4]>,
    pub base_type: Option<SymbolId>,
    pub interfaces: SmallVec<[SymbolId; 2]>,
    pub declaring_file: Option<FileId>,
    pub file_local: bool,
    /// For error types standing in for a type from an unreferenced assembly.
    pub missing_assembly: Option<String>,
}

impl SymbolData {
    fn new(name: &str, kind: SymbolKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            accessibility: Accessibility::NotApplicable,
            containing_type: None,
            containing_assembly: None,
            is_static: false,
            original_definition: SymbolId(u32::MAX),
            type_kind: None,
            type_arguments: SmallVec::new(),
            element_type: None,
            signature_types: SmallVec::new(),
            base_type: None,
            interfaces: SmallVec::new(),
            declaring_file: None,
            file_local: false,
            missing_assembly: None,
        }
    }
}

/// Arena of symbols plus the assemblies that declare them.
#[derive(Default)]
pub struct SymbolArena {
    symbols: Vec<SymbolData>,
    assemblies: AssemblyTable,
}

impl SymbolArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn get(&self, sym: SymbolId) -> &SymbolData {
        &self.symbols[sym.index()]
    }

    pub fn get_mut(&mut self, sym: SymbolId) -> &mut SymbolData {
        &mut self.symbols[sym.index()]
    }

    fn alloc(&mut self, mut data: SymbolData) -> SymbolId {
        let id = SymbolId(self.symbols.len() as u32);
        if data.original_definition == SymbolId(u32::MAX) {
            data.original_definition = id;
        }
        trace!(id = id.0, name = %data.name, kind = ?data.kind, "SymbolArena::alloc");
        self.symbols.push(data);
        id
    }

    // =========================================================================
    // Assemblies
    // =========================================================================

    pub fn add_assembly(&mut self, name: &str) -> AssemblyId {
        self.assemblies.add(AssemblyData::new(name))
    }

    /// Add a submission assembly belonging to interactive session `chain`.
    pub fn add_submission_assembly(&mut self, name: &str, chain: u32) -> AssemblyId {
        let mut data = AssemblyData::new(name);
        data.submission_chain = Some(chain);
        self.assemblies.add(data)
    }

    /// `giver` grants internal access to the assembly named `friend`.
    pub fn grant_friend_access(&mut self, giver: AssemblyId, friend: &str) {
        self.assemblies
            .get_mut(giver)
            .friends
            .insert(friend.to_string());
    }

    pub fn set_trust_policy(&mut self, policy: impl TrustPolicy + 'static) {
        self.assemblies.set_policy(policy);
    }

    pub fn assembly(&self, id: AssemblyId) -> &AssemblyData {
        self.assemblies.get(id)
    }

    // =========================================================================
    // Named types
    // =========================================================================

    /// Declare a top-level type.
    pub fn add_type(
        &mut self,
        assembly: AssemblyId,
        name: &str,
        type_kind: TypeKind,
        accessibility: Accessibility,
    ) -> SymbolId {
        let mut data = SymbolData::new(name, SymbolKind::NamedType);
        data.type_kind = Some(type_kind);
        data.accessibility = accessibility;
        data.containing_assembly = Some(assembly);
        self.alloc(data)
    }

    /// Declare a type nested inside `container`.
    pub fn add_nested_type(
        &mut self,
        container: SymbolId,
        name: &str,
        type_kind: TypeKind,
        accessibility: Accessibility,
    ) -> SymbolId {
        let mut data = SymbolData::new(name, SymbolKind::NamedType);
        data.type_kind = Some(type_kind);
        data.accessibility = accessibility;
        data.containing_type = Some(container);
        data.containing_assembly = self.get(container).containing_assembly;
        data.declaring_file = self.get(container).declaring_file;
        self.alloc(data)
    }

    /// Declare the submission container type of an interactive submission.
    pub fn add_submission_type(&mut self, assembly: AssemblyId, name: &str) -> SymbolId {
        self.add_type(assembly, name, TypeKind::Submission, Accessibility::Public)
    }

    pub fn set_base_type(&mut self, ty: SymbolId, base: SymbolId) {
        self.get_mut(ty).base_type = Some(base);
    }

    pub fn add_interface(&mut self, ty: SymbolId, interface: SymbolId) {
        self.get_mut(ty).interfaces.push(interface);
    }

    pub fn set_declaring_file(&mut self, ty: SymbolId, file: FileId) {
        self.get_mut(ty).declaring_file = Some(file);
    }

    /// Mark a top-level type as `file`-local to the file declaring it.
    pub fn mark_file_local(&mut self, ty: SymbolId, file: FileId) {
        let data = self.get_mut(ty);
        data.declaring_file = Some(file);
        data.file_local = true;
    }

    /// Instantiate the generic definition `definition` with `args`.
    pub fn construct(&mut self, definition: SymbolId, args: &[SymbolId]) -> SymbolId {
        let containing = self.get(definition).containing_type;
        self.construct_in(definition, containing, args)
    }

    /// Instantiate a generic nested type inside an already constructed
    /// container, e.g. `Outer<int>.Inner<string>`.
    pub fn construct_in(
        &mut self,
        definition: SymbolId,
        containing: Option<SymbolId>,
        args: &[SymbolId],
    ) -> SymbolId {
        let mut data = self.get(definition).clone();
        data.original_definition = self.get(definition).original_definition;
        data.containing_type = containing;
        data.type_arguments = args.iter().copied().collect();
        self.alloc(data)
    }

    // =========================================================================
    // Members
    // =========================================================================

    pub fn add_member(
        &mut self,
        container: SymbolId,
        name: &str,
        kind: SymbolKind,
        accessibility: Accessibility,
    ) -> SymbolId {
        debug_assert!(kind.is_member(), "add_member called with {kind:?}");
        let mut data = SymbolData::new(name, kind);
        data.accessibility = accessibility;
        data.containing_type = Some(container);
        data.containing_assembly = self.get(container).containing_assembly;
        self.alloc(data)
    }

    pub fn add_static_member(
        &mut self,
        container: SymbolId,
        name: &str,
        kind: SymbolKind,
        accessibility: Accessibility,
    ) -> SymbolId {
        let id = self.add_member(container, name, kind, accessibility);
        self.get_mut(id).is_static = true;
        id
    }

    /// The member `member` as seen through the constructed type `container`.
    pub fn member_of(&mut self, member: SymbolId, container: SymbolId) -> SymbolId {
        let mut data = self.get(member).clone();
        data.original_definition = self.get(member).original_definition;
        data.containing_type = Some(container);
        self.alloc(data)
    }

    // =========================================================================
    // Other symbols
    // =========================================================================

    pub fn add_type_parameter(&mut self, owner: SymbolId, name: &str) -> SymbolId {
        let mut data = SymbolData::new(name, SymbolKind::TypeParameter);
        data.containing_type = Some(owner);
        data.containing_assembly = self.get(owner).containing_assembly;
        self.alloc(data)
    }

    pub fn array_of(&mut self, element: SymbolId) -> SymbolId {
        let name = format!("{}[]", self.get(element).name);
        let mut data = SymbolData::new(&name, SymbolKind::ArrayType);
        data.element_type = Some(element);
        self.alloc(data)
    }

    pub fn pointer_to(&mut self, element: SymbolId) -> SymbolId {
        let name = format!("{}*", self.get(element).name);
        let mut data = SymbolData::new(&name, SymbolKind::PointerType);
        data.element_type = Some(element);
        self.alloc(data)
    }

    /// A function pointer type; `types` lists parameters then the return type.
    pub fn function_pointer(&mut self, types: &[SymbolId]) -> SymbolId {
        let mut data = SymbolData::new("delegate*", SymbolKind::FunctionPointerType);
        data.signature_types = types.iter().copied().collect();
        self.alloc(data)
    }

    pub fn error_type(&mut self, name: &str) -> SymbolId {
        let mut data = SymbolData::new(name, SymbolKind::ErrorType);
        data.type_kind = Some(TypeKind::Error);
        self.alloc(data)
    }

    /// An error type standing in for `name` declared in an assembly that the
    /// compilation does not reference.
    pub fn missing_type(&mut self, name: &str, assembly_name: &str) -> SymbolId {
        let id = self.error_type(name);
        self.get_mut(id).missing_assembly = Some(assembly_name.to_string());
        id
    }

    pub fn dynamic_type(&mut self) -> SymbolId {
        self.alloc(SymbolData::new("dynamic", SymbolKind::DynamicType))
    }

    /// A symbol with no accessibility of its own (local, parameter, label,
    /// namespace and the like).
    pub fn add_symbol(&mut self, name: &str, kind: SymbolKind) -> SymbolId {
        self.alloc(SymbolData::new(name, kind))
    }
}

impl SymbolGraph for SymbolArena {
    fn kind(&self, sym: SymbolId) -> SymbolKind {
        self.get(sym).kind
    }

    fn name(&self, sym: SymbolId) -> &str {
        &self.get(sym).name
    }

    fn declared_accessibility(&self, sym: SymbolId) -> Accessibility {
        self.get(sym).accessibility
    }

    fn containing_type(&self, sym: SymbolId) -> Option<SymbolId> {
        self.get(sym).containing_type
    }

    fn containing_assembly(&self, sym: SymbolId) -> Option<AssemblyId> {
        self.get(sym).containing_assembly
    }

    fn is_static(&self, sym: SymbolId) -> bool {
        self.get(sym).is_static
    }

    fn original_definition(&self, sym: SymbolId) -> SymbolId {
        self.get(sym).original_definition
    }

    fn type_kind(&self, ty: SymbolId) -> Option<TypeKind> {
        self.get(ty).type_kind
    }

    fn type_arguments(&self, ty: SymbolId) -> &[SymbolId] {
        &self.get(ty).type_arguments
    }

    fn element_type(&self, ty: SymbolId) -> Option<SymbolId> {
        self.get(ty).element_type
    }

    fn signature_types(&self, ty: SymbolId) -> &[SymbolId] {
        &self.get(ty).signature_types
    }

    fn file_local_to(&self, ty: SymbolId) -> Option<FileId> {
        let data = self.get(ty);
        if data.file_local {
            data.declaring_file
        } else {
            None
        }
    }

    fn declaring_file(&self, ty: SymbolId) -> Option<FileId> {
        self.get(ty).declaring_file
    }

    fn next_base_type(
        &self,
        ty: SymbolId,
        bases_being_resolved: Option<&BasesBeingResolved<'_>>,
        diagnostics: &mut UseSiteDiagnostics,
    ) -> Option<SymbolId> {
        let definition = self.original_definition(ty);
        if bases_being_resolved.is_some_and(|b| b.contains(definition)) {
            return None;
        }
        let base = self.get(definition).base_type?;
        if let Some(assembly_name) = &self.get(base).missing_assembly {
            diagnostics.report(
                diagnostic_messages::TYPE_DEFINED_IN_UNREFERENCED_ASSEMBLY,
                &[self.get(base).name.as_str(), assembly_name.as_str()],
            );
        }
        Some(base)
    }

    fn interfaces(
        &self,
        ty: SymbolId,
        bases_being_resolved: Option<&BasesBeingResolved<'_>>,
        diagnostics: &mut UseSiteDiagnostics,
    ) -> SmallVec<[SymbolId; 4]> {
        let definition = self.original_definition(ty);
        if bases_being_resolved.is_some_and(|b| b.contains(definition)) {
            return SmallVec::new();
        }
        let data = self.get(definition);
        for &interface in &data.interfaces {
            if let Some(assembly_name) = &self.get(interface).missing_assembly {
                diagnostics.report(
                    diagnostic_messages::TYPE_DEFINED_IN_UNREFERENCED_ASSEMBLY,
                    &[self.get(interface).name.as_str(), assembly_name.as_str()],
                );
            }
        }
        data.interfaces.iter().copied().collect()
    }

    fn has_internal_access_to(&self, from: AssemblyId, to: AssemblyId) -> bool {
        self.assemblies.has_internal_access_to(from, to)
    }
}
