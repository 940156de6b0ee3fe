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
use internal_error::{ErrorIntoInternal, InternalError};
use phonebook_departments::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Gives every newly created department an extension named after its value
/// when none was supplied
pub struct DepartmentExtensionHook {
    department_repo: Arc<dyn DepartmentRepository>,
}

#[component(pub)]
#[interface(dyn DepartmentLifecycleHook)]
impl DepartmentExtensionHook {
    pub fn new(department_repo: Arc<dyn DepartmentRepository>) -> Self {
        Self { department_repo }
    }
}

#[async_trait::async_trait]
impl DepartmentLifecycleHook for DepartmentExtensionHook {
    async fn on_department_persisted(
        &self,
        department: &Department,
        created: bool,
    ) -> Result<(), InternalError> {
        if !created || department.extension.is_some() {
            return Ok(());
        }

        match self
            .department_repo
            .create_extension(department.id, &department.value, None)
            .await
        {
            Ok(extension) => {
                tracing::debug!(
                    department_id = %department.id,
                    extension_id = %extension.id,
                    "Created default department extension"
                );
                Ok(())
            }
            Err(CreateDepartmentExtensionError::AlreadyExists { .. }) => Ok(()),
            Err(e) => Err(e.int_err()),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
