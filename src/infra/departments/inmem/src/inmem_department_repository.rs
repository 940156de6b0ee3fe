// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use dill::*;
use internal_error::InternalError;

use crate::domain::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct InMemoryDepartmentRepository {
    state: Arc<Mutex<State>>,
}

#[derive(Default)]
struct State {
    last_department_id: u64,
    last_extension_id: u64,
    departments: BTreeMap<DepartmentID, DepartmentRow>,
    extensions: Vec<DepartmentExtension>,
}

#[derive(Clone)]
struct DepartmentRow {
    id: DepartmentID,
    value: String,
    block: bool,
    has_block_guard: bool,
}

impl State {
    fn assemble(&self, row: &DepartmentRow) -> Department {
        Department {
            id: row.id,
            value: row.value.clone(),
            block: row.block,
            has_block_guard: row.has_block_guard,
            extension: self
                .extensions
                .iter()
                .find(|e| e.department_id == row.id)
                .cloned(),
        }
    }

    fn has_extension(&self, extension_id: DepartmentExtensionID) -> bool {
        self.extensions.iter().any(|e| e.id == extension_id)
    }

    fn insert_extension(
        &mut self,
        department_id: DepartmentID,
        name: &str,
        parent_id: Option<DepartmentExtensionID>,
    ) -> DepartmentExtensionID {
        self.last_extension_id += 1;
        let extension_id = DepartmentExtensionID::new(self.last_extension_id);
        self.extensions.push(DepartmentExtension {
            id: extension_id,
            department_id,
            parent_id,
            lft: 0,
            rght: 0,
            name: name.to_string(),
        });
        recover_tree(&mut self.extensions);
        extension_id
    }

    fn check_unique_value(
        &self,
        value: &str,
        except: Option<DepartmentID>,
    ) -> Result<(), DuplicateDepartmentValueError> {
        let taken = self
            .departments
            .values()
            .any(|row| row.value == value && Some(row.id) != except);
        if taken {
            Err(DuplicateDepartmentValueError {
                value: value.to_string(),
            })
        } else {
            Ok(())
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[component(pub)]
#[interface(dyn DepartmentRepository)]
#[scope(Singleton)]
impl InMemoryDepartmentRepository {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(State::default())),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl DepartmentRepository for InMemoryDepartmentRepository {
    async fn create_department(
        &self,
        new_department: &NewDepartment,
        has_block_guard: bool,
    ) -> Result<Department, CreateDepartmentError> {
        let mut state = self.state.lock().unwrap();

        state.check_unique_value(&new_department.value, None)?;
        if let Some(parent_id) = new_department.parent_id
            && !state.has_extension(parent_id)
        {
            return Err(CreateDepartmentError::ParentNotFound { parent_id });
        }

        state.last_department_id += 1;
        let row = DepartmentRow {
            id: DepartmentID::new(state.last_department_id),
            value: new_department.value.clone(),
            block: new_department.block,
            has_block_guard,
        };
        state.departments.insert(row.id, row.clone());

        let extension_name = new_department
            .extension_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty());
        if extension_name.is_some() || new_department.parent_id.is_some() {
            state.insert_extension(
                row.id,
                extension_name.unwrap_or(&row.value),
                new_department.parent_id,
            );
        }

        Ok(state.assemble(&row))
    }

    async fn create_extension(
        &self,
        department_id: DepartmentID,
        name: &str,
        parent_id: Option<DepartmentExtensionID>,
    ) -> Result<DepartmentExtension, CreateDepartmentExtensionError> {
        let mut state = self.state.lock().unwrap();

        if !state.departments.contains_key(&department_id) {
            return Err(DepartmentNotFoundError { department_id }.into());
        }
        if state
            .extensions
            .iter()
            .any(|e| e.department_id == department_id)
        {
            return Err(CreateDepartmentExtensionError::AlreadyExists { department_id });
        }
        if let Some(parent_id) = parent_id
            && !state.has_extension(parent_id)
        {
            return Err(CreateDepartmentExtensionError::ParentNotFound { parent_id });
        }

        let extension_id = state.insert_extension(department_id, name, parent_id);

        state
            .extensions
            .iter()
            .find(|e| e.id == extension_id)
            .cloned()
            .ok_or_else(|| InternalError::new("extension vanished after insert").into())
    }

    async fn get_department(
        &self,
        department_id: DepartmentID,
    ) -> Result<Department, GetDepartmentError> {
        let state = self.state.lock().unwrap();
        let row = state
            .departments
            .get(&department_id)
            .ok_or(DepartmentNotFoundError { department_id })?;
        Ok(state.assemble(row))
    }

    async fn update_department(
        &self,
        department_id: DepartmentID,
        update: &DepartmentUpdate,
    ) -> Result<Department, UpdateDepartmentError> {
        let mut state = self.state.lock().unwrap();

        if !state.departments.contains_key(&department_id) {
            return Err(DepartmentNotFoundError { department_id }.into());
        }
        if let Some(value) = &update.value {
            state.check_unique_value(value, Some(department_id))?;
        }

        let state = &mut *state;
        let Some(row) = state.departments.get_mut(&department_id) else {
            return Err(DepartmentNotFoundError { department_id }.into());
        };
        if let Some(value) = &update.value {
            row.value.clone_from(value);
        }
        if let Some(block) = update.block {
            row.block = block;
        }

        let extension_name = update
            .extension_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty());
        if let Some(name) = extension_name
            && let Some(extension) = state
                .extensions
                .iter_mut()
                .find(|e| e.department_id == department_id)
        {
            extension.name = name.to_string();
            recover_tree(&mut state.extensions);
        }

        let row = row.clone();
        Ok(state.assemble(&row))
    }

    async fn delete_department(
        &self,
        department_id: DepartmentID,
    ) -> Result<Department, DeleteDepartmentRecordError> {
        let mut state = self.state.lock().unwrap();

        let Some(row) = state.departments.get(&department_id).cloned() else {
            return Err(DepartmentNotFoundError { department_id }.into());
        };
        let department = state.assemble(&row);

        if !department.can_be_deleted() {
            return Err(DeleteNotPermittedError { department_id }.into());
        }

        state.departments.remove(&department_id);
        if let Some(extension) = &department.extension {
            state.extensions.retain(|e| e.id != extension.id);
            reparent_children(&mut state.extensions, extension);
            recover_tree(&mut state.extensions);
        }

        tracing::debug!(%department_id, "Department removed with its extension");

        Ok(department)
    }

    async fn list_departments(&self) -> Result<Vec<Department>, InternalError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .departments
            .values()
            .map(|row| state.assemble(row))
            .collect())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
