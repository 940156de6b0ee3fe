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
use phonebook_departments::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct RenameDepartmentUseCaseImpl {
    employee_directory: Arc<dyn EmployeeDirectory>,
    config: Arc<DepartmentsConfig>,
}

#[component(pub)]
#[interface(dyn RenameDepartmentUseCase)]
impl RenameDepartmentUseCaseImpl {
    pub fn new(
        employee_directory: Arc<dyn EmployeeDirectory>,
        config: Arc<DepartmentsConfig>,
    ) -> Self {
        Self {
            employee_directory,
            config,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl RenameDepartmentUseCase for RenameDepartmentUseCaseImpl {
    #[tracing::instrument(
        level = "info",
        skip_all,
        fields(
            old_name = %request.old_name,
            new_name = %request.new_name,
            use_ldap = request.use_ldap,
        )
    )]
    async fn execute(
        &self,
        request: &RenameDepartmentRequest,
    ) -> Result<RenameDepartmentReport, RenameDepartmentError> {
        RenameRequestValidator::new(self.config.value_rules())
            .validate(&request.old_name, &request.new_name)?;

        let employees = self
            .employee_directory
            .list_employees_by_department_name(&request.old_name, request.use_ldap)
            .await?;

        if employees.is_empty() {
            tracing::info!("No employees to rename");
            return Err(NoEmployeesAffectedError {
                old_name: request.old_name.clone(),
            }
            .into());
        }

        let context = request.change_context();
        let mut report = RenameDepartmentReport {
            old_name: request.old_name.clone(),
            new_name: request.new_name.clone(),
            ..Default::default()
        };

        for employee_dn in employees {
            match self
                .employee_directory
                .change_department(&employee_dn, &request.new_name, &context)
                .await
            {
                Ok(()) => report.renamed.push(employee_dn),
                Err(e) => {
                    tracing::warn!(
                        %employee_dn,
                        error = ?e,
                        error_msg = %e,
                        "Failed to change employee department"
                    );
                    report.failed.push(EmployeeUpdateFailure {
                        employee_dn,
                        reason: e.to_string(),
                    });
                }
            }
        }

        tracing::info!(
            affected = report.affected(),
            failed = report.failed.len(),
            "Department rename propagated"
        );

        if report.is_success() {
            Ok(report)
        } else {
            Err(EmployeeUpdatesFailedError { report }.into())
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
