// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, Mutex};

use dill::*;
use internal_error::InternalError;

use crate::domain::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Employee records of the local database together with a directory view.
///
/// Directory-backed changes are written to both views, local changes only to
/// the local store.
pub struct InMemoryEmployeeDirectory {
    state: Arc<Mutex<State>>,
}

#[derive(Default)]
struct State {
    local: BTreeMap<EmployeeDn, Employee>,
    directory: BTreeMap<EmployeeDn, Employee>,
    write_protected: HashSet<EmployeeDn>,
    change_log: Vec<EmployeeChangeRecord>,
}

/// Audit entry of an applied department change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeChangeRecord {
    pub employee_dn: EmployeeDn,
    pub old_department: String,
    pub new_department: String,
    pub acting_user_id: Option<UserID>,
    pub use_ldap: bool,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[component(pub)]
#[interface(dyn EmployeeDirectory)]
#[scope(Singleton)]
impl InMemoryEmployeeDirectory {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(State::default())),
        }
    }

    pub fn add_local_employee(&self, employee: Employee) {
        let mut state = self.state.lock().unwrap();
        state.local.insert(employee.dn.clone(), employee);
    }

    /// Adds the employee to the directory and mirrors it into the local store
    pub fn add_directory_employee(&self, employee: Employee) {
        let mut state = self.state.lock().unwrap();
        state.local.insert(employee.dn.clone(), employee.clone());
        state.directory.insert(employee.dn.clone(), employee);
    }

    /// Makes the directory entry refuse any change
    pub fn protect(&self, employee_dn: &EmployeeDn) {
        let mut state = self.state.lock().unwrap();
        state.write_protected.insert(employee_dn.clone());
    }

    pub fn local_employee(&self, employee_dn: &EmployeeDn) -> Option<Employee> {
        let state = self.state.lock().unwrap();
        state.local.get(employee_dn).cloned()
    }

    pub fn directory_employee(&self, employee_dn: &EmployeeDn) -> Option<Employee> {
        let state = self.state.lock().unwrap();
        state.directory.get(employee_dn).cloned()
    }

    pub fn change_log(&self) -> Vec<EmployeeChangeRecord> {
        let state = self.state.lock().unwrap();
        state.change_log.clone()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl EmployeeDirectory for InMemoryEmployeeDirectory {
    async fn list_employees_by_department_name(
        &self,
        department_name: &str,
        use_ldap: bool,
    ) -> Result<Vec<EmployeeDn>, InternalError> {
        let state = self.state.lock().unwrap();
        let source = if use_ldap {
            &state.directory
        } else {
            &state.local
        };

        Ok(source
            .values()
            .filter(|e| e.department == department_name)
            .map(|e| e.dn.clone())
            .collect())
    }

    async fn change_department(
        &self,
        employee_dn: &EmployeeDn,
        new_department_name: &str,
        context: &EmployeeChangeContext,
    ) -> Result<(), ChangeEmployeeDepartmentError> {
        if !context.user_role.can_change_department() {
            return Err(ChangeEmployeeDepartmentError::PermissionDenied {
                user_role: context.user_role,
            });
        }

        let mut state = self.state.lock().unwrap();
        let state = &mut *state;

        let not_found = || ChangeEmployeeDepartmentError::NotFound {
            employee_dn: employee_dn.clone(),
        };

        let old_department = if context.use_ldap {
            if state.write_protected.contains(employee_dn) {
                return Err(ChangeEmployeeDepartmentError::Rejected {
                    employee_dn: employee_dn.clone(),
                    reason: "directory entry is write-protected".to_string(),
                });
            }

            let entry = state.directory.get_mut(employee_dn).ok_or_else(not_found)?;
            let old_department =
                std::mem::replace(&mut entry.department, new_department_name.to_string());

            if let Some(local) = state.local.get_mut(employee_dn) {
                local.department = new_department_name.to_string();
            }
            old_department
        } else {
            let local = state.local.get_mut(employee_dn).ok_or_else(not_found)?;
            std::mem::replace(&mut local.department, new_department_name.to_string())
        };

        tracing::debug!(
            %employee_dn,
            %old_department,
            new_department = %new_department_name,
            acting_user_id = ?context.acting_user_id,
            use_ldap = context.use_ldap,
            "Employee department changed"
        );

        state.change_log.push(EmployeeChangeRecord {
            employee_dn: employee_dn.clone(),
            old_department,
            new_department: new_department_name.to_string(),
            acting_user_id: context.acting_user_id,
            use_ldap: context.use_ldap,
        });

        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
