// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use dill::*;
use internal_error::{InternalError, ResultIntoInternal};
use phonebook_departments::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct DepartmentServiceImpl {
    department_repo: Arc<dyn DepartmentRepository>,
    lifecycle_hooks: Vec<Arc<dyn DepartmentLifecycleHook>>,
    config: Arc<DepartmentsConfig>,
}

#[component(pub)]
#[interface(dyn DepartmentService)]
impl DepartmentServiceImpl {
    pub fn new(
        department_repo: Arc<dyn DepartmentRepository>,
        lifecycle_hooks: Vec<Arc<dyn DepartmentLifecycleHook>>,
        config: Arc<DepartmentsConfig>,
    ) -> Self {
        Self {
            department_repo,
            lifecycle_hooks,
            config,
        }
    }

    async fn notify_persisted(
        &self,
        department: &Department,
        created: bool,
    ) -> Result<(), InternalError> {
        for hook in &self.lifecycle_hooks {
            hook.on_department_persisted(department, created).await?;
        }
        Ok(())
    }

    async fn notify_deleted(&self, department: &Department) -> Result<(), InternalError> {
        for hook in &self.lifecycle_hooks {
            hook.on_department_deleted(department).await?;
        }
        Ok(())
    }

    async fn reload(&self, department_id: DepartmentID) -> Result<Department, InternalError> {
        self.department_repo
            .get_department(department_id)
            .await
            .int_err()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl DepartmentService for DepartmentServiceImpl {
    async fn get_department(
        &self,
        department_id: DepartmentID,
    ) -> Result<Department, GetDepartmentError> {
        self.department_repo.get_department(department_id).await
    }

    #[tracing::instrument(level = "info", skip_all, fields(value = %new_department.value))]
    async fn create_department(
        &self,
        new_department: NewDepartment,
    ) -> Result<Department, SaveDepartmentError> {
        self.config
            .value_rules()
            .validate_value(&new_department.value)?;

        let department = self
            .department_repo
            .create_department(&new_department, self.config.block_guard)
            .await
            .map_err(|e| match e {
                CreateDepartmentError::Duplicate(e) => SaveDepartmentError::Duplicate(e),
                CreateDepartmentError::ParentNotFound { parent_id } => {
                    SaveDepartmentError::ParentNotFound { parent_id }
                }
                CreateDepartmentError::Internal(e) => SaveDepartmentError::Internal(e),
            })?;

        self.notify_persisted(&department, true).await?;

        tracing::info!(department_id = %department.id, "Department created");

        Ok(self.reload(department.id).await?)
    }

    #[tracing::instrument(level = "info", skip_all, fields(%department_id))]
    async fn update_department(
        &self,
        department_id: DepartmentID,
        update: DepartmentUpdate,
    ) -> Result<Department, SaveDepartmentError> {
        if let Some(value) = &update.value {
            self.config.value_rules().validate_value(value)?;
        }

        let department = self
            .department_repo
            .update_department(department_id, &update)
            .await
            .map_err(|e| match e {
                UpdateDepartmentError::NotFound(e) => SaveDepartmentError::NotFound(e),
                UpdateDepartmentError::Duplicate(e) => SaveDepartmentError::Duplicate(e),
                UpdateDepartmentError::Internal(e) => SaveDepartmentError::Internal(e),
            })?;

        self.notify_persisted(&department, false).await?;

        Ok(department)
    }

    #[tracing::instrument(level = "info", skip_all, fields(%department_id))]
    async fn delete_department(
        &self,
        department_id: DepartmentID,
    ) -> Result<Department, DeleteDepartmentError> {
        let department = self
            .department_repo
            .delete_department(department_id)
            .await
            .map_err(|e| match e {
                DeleteDepartmentRecordError::NotFound(e) => DeleteDepartmentError::NotFound(e),
                DeleteDepartmentRecordError::NotPermitted(e) => {
                    tracing::warn!(
                        %department_id,
                        "Refusing to delete a department that is not blocked"
                    );
                    DeleteDepartmentError::DeleteNotPermitted(e)
                }
                DeleteDepartmentRecordError::Internal(e) => DeleteDepartmentError::Internal(e),
            })?;

        self.notify_deleted(&department).await?;

        tracing::info!(%department_id, "Department deleted");

        Ok(department)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
