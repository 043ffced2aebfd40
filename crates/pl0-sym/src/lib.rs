//! pl0-sym - The PL/0 name table (procedures, variables, constants).
//!
//! Mirrors the scoping rules of the reference name list: procedures nest in
//! a tree rooted at an implicit `main` procedure, constants are interned
//! globally by value but may additionally carry a scoped name, and variable
//! lookup walks from the current procedure up through its ancestors with
//! local names shadowing global ones.

pub mod error;

pub use error::{NameListError, NameListResult};

use pl0_util::{define_idx, IndexVec};

define_idx!(ProcId);
define_idx!(VarId);

/// Index into the global, value-interned constant pool.
pub type ConstIndex = u32;

/// A named binding to a pooled constant, visible inside the procedure that
/// declared it.
#[derive(Debug, Clone)]
pub struct NamedConst {
    pub name: String,
    pub pool_index: ConstIndex,
}

#[derive(Debug, Clone)]
pub struct Variable {
    pub name: String,
    pub parent: ProcId,
    pub address_offset: u32,
    pub is_procedure_parameter: bool,
    pub array_len: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct Procedure {
    pub index: ProcId,
    pub parent: Option<ProcId>,
    pub name: String,
    pub constants: Vec<NamedConst>,
    pub variables: Vec<VarId>,
    pub child_procedures: Vec<ProcId>,
    pub local_address_offset: u32,
}

impl Procedure {
    fn new(index: ProcId, parent: Option<ProcId>, name: String) -> Self {
        Self {
            index,
            parent,
            name,
            constants: Vec::new(),
            variables: Vec::new(),
            child_procedures: Vec::new(),
            local_address_offset: 0,
        }
    }
}

/// Resolution of an identifier found by [`NameList::lookup_local`] or
/// [`NameList::lookup_global`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ident {
    Proc(ProcId),
    Const(ConstIndex),
    Var(VarId),
}

/// The name table for a single compilation unit.
///
/// Owns every [`Procedure`] and [`Variable`] ever declared plus the global
/// constant pool, and tracks which procedure is currently open for
/// declarations.
pub struct NameList {
    procedures: IndexVec<ProcId, Procedure>,
    variables: IndexVec<VarId, Variable>,
    constant_pool: Vec<i32>,
    current_procedure: ProcId,
}

impl NameList {
    /// Creates a name list seeded with a parentless `main` procedure, made
    /// current.
    pub fn new() -> Self {
        let mut procedures: IndexVec<ProcId, Procedure> = IndexVec::new();
        let main = procedures.push(Procedure::new(ProcId(0), None, "MAIN".to_string()));
        Self {
            procedures,
            variables: IndexVec::new(),
            constant_pool: Vec::new(),
            current_procedure: main,
        }
    }

    pub fn main_proc(&self) -> ProcId {
        ProcId(0)
    }

    pub fn current_proc(&self) -> ProcId {
        self.current_procedure
    }

    pub fn procedure(&self, id: ProcId) -> &Procedure {
        &self.procedures[id]
    }

    pub fn variable(&self, id: VarId) -> &Variable {
        &self.variables[id]
    }

    pub fn constant_value(&self, pool_index: ConstIndex) -> i32 {
        self.constant_pool[pool_index as usize]
    }

    pub fn constant_pool(&self) -> &[i32] {
        &self.constant_pool
    }

    pub fn procedure_count(&self) -> usize {
        self.procedures.len()
    }

    /// Opens a new child procedure under the current one and makes it
    /// current. The caller is responsible for checking
    /// [`NameList::is_local_ident`] first to reject duplicate names.
    pub fn create_procedure(&mut self, name: String) -> ProcId {
        let parent = self.current_procedure;
        let placeholder = ProcId(self.procedures.len() as u32);
        let proc = Procedure::new(placeholder, Some(parent), name);
        let id = self.procedures.push(proc);
        self.procedures[parent].child_procedures.push(id);
        self.current_procedure = id;
        tracing::debug!(proc = id.0, parent = parent.0, "procedure opened");
        id
    }

    /// Closes the current procedure and returns control to its parent.
    /// Errors if the current procedure has no parent (i.e. it is `main`).
    pub fn end_procedure(&mut self) -> NameListResult<ProcId> {
        let parent = self.procedures[self.current_procedure]
            .parent
            .ok_or(NameListError::EndProcedureNoParent)?;
        tracing::debug!(proc = self.current_procedure.0, "procedure closed");
        self.current_procedure = parent;
        Ok(parent)
    }

    /// Interns `value` in the global constant pool, reusing an existing
    /// entry with the same value. If `name` is given, also binds that name
    /// to the pooled value in the current procedure's scope.
    pub fn create_const(&mut self, value: i32, name: Option<String>) -> ConstIndex {
        let pool_index = self.search_const_by_value(value).unwrap_or_else(|| {
            self.constant_pool.push(value);
            (self.constant_pool.len() - 1) as ConstIndex
        });
        if let Some(name) = name {
            self.procedures[self.current_procedure]
                .constants
                .push(NamedConst { name, pool_index });
        }
        pool_index
    }

    pub fn search_const_by_value(&self, value: i32) -> Option<ConstIndex> {
        self.constant_pool.iter().position(|&v| v == value).map(|i| i as ConstIndex)
    }

    fn alloc_variable(&mut self, name: String, is_procedure_parameter: bool) -> VarId {
        let parent = self.current_procedure;
        let address_offset = self.procedures[parent].local_address_offset;
        self.procedures[parent].local_address_offset += 4;
        let var = Variable {
            name,
            parent,
            address_offset,
            is_procedure_parameter,
            array_len: None,
        };
        let id = self.variables.push(var);
        self.procedures[parent].variables.push(id);
        id
    }

    pub fn create_variable(&mut self, name: String) -> VarId {
        self.alloc_variable(name, false)
    }

    pub fn create_procedure_parameter(&mut self, name: String) -> VarId {
        self.alloc_variable(name, true)
    }

    /// Recomputes relative addresses of the current procedure's parameters
    /// once the full parameter list is known, so the first-declared
    /// parameter does not end up at the highest address.
    pub fn correct_parameter_list(&mut self) {
        let proc = self.current_procedure;
        let param_ids: Vec<VarId> = self.procedures[proc]
            .variables
            .iter()
            .copied()
            .filter(|&id| self.variables[id].is_procedure_parameter)
            .collect();
        let offsets: Vec<u32> = param_ids.iter().map(|&id| self.variables[id].address_offset).collect();
        for (id, offset) in param_ids.iter().zip(offsets.iter().rev()) {
            self.variables[*id].address_offset = *offset;
        }
    }

    /// Marks the most recently declared variable in the current procedure as
    /// an array of `length` elements.
    pub fn turn_last_variable_into_array(&mut self, length: u32) -> NameListResult<()> {
        let proc = self.current_procedure;
        let var_id = *self.procedures[proc].variables.last().ok_or(NameListError::NoCurrentVariable)?;
        self.variables[var_id].array_len = Some(length);
        self.procedures[proc].local_address_offset += 4 * (length - 1);
        Ok(())
    }

    /// Looks up `name` within `proc` only: itself, its child procedures, its
    /// named constants, then its variables - matching declaration-time
    /// shadowing rules used to reject duplicates.
    pub fn lookup_local(&self, name: &str, proc: ProcId) -> Option<Ident> {
        let p = &self.procedures[proc];
        if p.name.eq_ignore_ascii_case(name) {
            return Some(Ident::Proc(proc));
        }
        for &child in &p.child_procedures {
            if self.procedures[child].name.eq_ignore_ascii_case(name) {
                return Some(Ident::Proc(child));
            }
        }
        for c in &p.constants {
            if c.name.eq_ignore_ascii_case(name) {
                return Some(Ident::Const(c.pool_index));
            }
        }
        for &v in &p.variables {
            if self.variables[v].name.eq_ignore_ascii_case(name) {
                return Some(Ident::Var(v));
            }
        }
        None
    }

    pub fn is_local_ident(&self, name: &str, proc: ProcId) -> bool {
        self.lookup_local(name, proc).is_some()
    }

    /// Looks up `name` starting at `proc` and walking up through parents;
    /// a match in an inner scope shadows any same-named outer binding.
    pub fn lookup_global(&self, name: &str, proc: ProcId) -> Option<Ident> {
        let mut cur = Some(proc);
        while let Some(id) = cur {
            if let Some(found) = self.lookup_local(name, id) {
                return Some(found);
            }
            cur = self.procedures[id].parent;
        }
        None
    }

    pub fn is_global_ident(&self, name: &str, proc: ProcId) -> bool {
        self.lookup_global(name, proc).is_some()
    }
}

impl Default for NameList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_name_list_has_main_proc_current() {
        let names = NameList::new();
        assert_eq!(names.current_proc(), names.main_proc());
        assert!(names.procedure(names.main_proc()).parent.is_none());
    }

    #[test]
    fn create_and_end_procedure_round_trips_current() {
        let mut names = NameList::new();
        let main = names.current_proc();
        let p = names.create_procedure("P".to_string());
        assert_ne!(p, main);
        assert_eq!(names.procedure(p).parent, Some(main));
        let back = names.end_procedure().unwrap();
        assert_eq!(back, main);
        assert_eq!(names.current_proc(), main);
    }

    #[test]
    fn end_procedure_without_parent_errors() {
        let mut names = NameList::new();
        assert!(matches!(names.end_procedure(), Err(NameListError::EndProcedureNoParent)));
    }

    #[test]
    fn constants_are_interned_by_value() {
        let mut names = NameList::new();
        let a = names.create_const(42, None);
        let b = names.create_const(42, None);
        let c = names.create_const(7, None);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(names.constant_pool(), &[42, 7]);
    }

    #[test]
    fn named_const_is_locally_lookup_able() {
        let mut names = NameList::new();
        let main = names.current_proc();
        names.create_const(10, Some("MAXVAL".to_string()));
        assert_eq!(names.lookup_local("MAXVAL", main), Some(Ident::Const(0)));
    }

    #[test]
    fn variables_get_increasing_offsets() {
        let mut names = NameList::new();
        let v1 = names.create_variable("X".to_string());
        let v2 = names.create_variable("Y".to_string());
        assert_eq!(names.variable(v1).address_offset, 0);
        assert_eq!(names.variable(v2).address_offset, 4);
    }

    #[test]
    fn local_shadows_global_lookup() {
        let mut names = NameList::new();
        names.create_variable("X".to_string());
        let p = names.create_procedure("P".to_string());
        names.create_variable("X".to_string());
        match names.lookup_global("X", p) {
            Some(Ident::Var(v)) => assert_eq!(names.variable(v).parent, p),
            other => panic!("expected local shadow, got {other:?}"),
        }
    }

    #[test]
    fn lookup_global_falls_back_to_ancestor() {
        let mut names = NameList::new();
        names.create_variable("G".to_string());
        let p = names.create_procedure("P".to_string());
        assert!(names.lookup_local("G", p).is_none());
        assert!(names.lookup_global("G", p).is_some());
    }

    #[test]
    fn turn_last_variable_into_array_sets_length() {
        let mut names = NameList::new();
        let v = names.create_variable("ARR".to_string());
        names.turn_last_variable_into_array(10).unwrap();
        assert_eq!(names.variable(v).array_len, Some(10));
    }

    #[test]
    fn turn_last_variable_into_array_without_variable_errors() {
        let mut names = NameList::new();
        assert!(matches!(
            names.turn_last_variable_into_array(10),
            Err(NameListError::NoCurrentVariable)
        ));
    }

    #[test]
    fn correct_parameter_list_reverses_parameter_offsets() {
        let mut names = NameList::new();
        let p = names.create_procedure("P".to_string());
        let a = names.create_procedure_parameter("A".to_string());
        let b = names.create_procedure_parameter("B".to_string());
        let c = names.create_procedure_parameter("C".to_string());
        names.correct_parameter_list();
        assert_eq!(names.variable(a).address_offset, 8);
        assert_eq!(names.variable(b).address_offset, 4);
        assert_eq!(names.variable(c).address_offset, 0);
        assert_eq!(names.procedure(p).local_address_offset, 12);
    }
}
