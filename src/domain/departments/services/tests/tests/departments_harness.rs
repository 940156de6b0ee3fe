// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use dill::{Catalog, CatalogBuilder};
use phonebook_departments::*;
use phonebook_departments_inmem::{
    InMemoryCacheStore,
    InMemoryDepartmentRepository,
    InMemoryEmployeeDirectory,
};
use phonebook_task_system::{JobAgent, JobAgentConfig, JobQueue};
use phonebook_task_system_inmem::InMemoryJobQueue;
use phonebook_task_system_services::JobAgentImpl;
use time_source::{SystemTimeSource, SystemTimeSourceStub};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub(crate) struct DepartmentsHarness {
    _catalog: Catalog,
    pub(crate) department_service: Arc<dyn DepartmentService>,
    pub(crate) list_cache: Arc<dyn DepartmentListCache>,
    pub(crate) rename_use_case: Arc<dyn RenameDepartmentUseCase>,
    pub(crate) submit_use_case: Arc<dyn SubmitRenameDepartmentTaskUseCase>,
    pub(crate) job_queue: Arc<dyn JobQueue>,
    pub(crate) job_agent: Arc<dyn JobAgent>,
    pub(crate) employee_directory: Arc<InMemoryEmployeeDirectory>,
    pub(crate) cache_store: Arc<InMemoryCacheStore>,
    pub(crate) config: Arc<DepartmentsConfig>,
}

impl DepartmentsHarness {
    pub(crate) fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2050, 1, 1, 12, 0, 0).unwrap()
    }

    pub(crate) fn new() -> Self {
        Self::with_config(DepartmentsConfig::default())
    }

    pub(crate) fn with_config(config: DepartmentsConfig) -> Self {
        let mut b = CatalogBuilder::new();
        b.add::<InMemoryDepartmentRepository>()
            .add::<InMemoryEmployeeDirectory>()
            .add::<InMemoryCacheStore>()
            .add::<InMemoryJobQueue>()
            .add::<JobAgentImpl>()
            .add_value(config)
            .add_value(JobAgentConfig::default())
            .add_value(SystemTimeSourceStub::new_set(Self::t0()))
            .bind::<dyn SystemTimeSource, SystemTimeSourceStub>();
        phonebook_departments_services::register_dependencies(&mut b);

        let catalog = b.build();

        Self {
            department_service: catalog.get_one().unwrap(),
            list_cache: catalog.get_one().unwrap(),
            rename_use_case: catalog.get_one().unwrap(),
            submit_use_case: catalog.get_one().unwrap(),
            job_queue: catalog.get_one().unwrap(),
            job_agent: catalog.get_one().unwrap(),
            employee_directory: catalog.get_one().unwrap(),
            cache_store: catalog.get_one().unwrap(),
            config: catalog.get_one().unwrap(),
            _catalog: catalog,
        }
    }

    pub(crate) async fn create_department(
        &self,
        value: &str,
        extension_name: Option<&str>,
    ) -> Department {
        let mut new_department = NewDepartment::new(value);
        new_department.extension_name = extension_name.map(ToString::to_string);
        self.department_service
            .create_department(new_department)
            .await
            .unwrap()
    }

    pub(crate) fn add_employees(&self, department: &str, dns: &[&str], in_directory: bool) {
        for dn in dns {
            let employee = Employee {
                dn: EmployeeDn::new(*dn),
                name: dn.trim_start_matches("cn=").to_string(),
                department: department.to_string(),
            };
            if in_directory {
                self.employee_directory.add_directory_employee(employee);
            } else {
                self.employee_directory.add_local_employee(employee);
            }
        }
    }

    pub(crate) fn department_of(&self, dn: &str) -> String {
        self.employee_directory
            .local_employee(&EmployeeDn::new(dn))
            .unwrap()
            .department
    }

    pub(crate) async fn employees_of(&self, department: &str) -> Vec<EmployeeDn> {
        self.employee_directory
            .list_employees_by_department_name(department, false)
            .await
            .unwrap()
    }

    /// Marks the listing cache as populated so invalidation becomes observable
    pub(crate) async fn warm_cache(&self) {
        self.list_cache
            .get_list_departments_with_extension(None)
            .await
            .unwrap();
        assert_eq!(self.cached_listings(), 1);
    }

    pub(crate) fn cached_listings(&self) -> usize {
        self.cache_store.len(&self.config.list_cache_partition)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub(crate) fn admin_rename(old_name: &str, new_name: &str) -> RenameDepartmentRequest {
    RenameDepartmentRequest::new(old_name, new_name).acting_as(UserRole::ADMIN, Some(UserID::new(7)))
}

pub(crate) fn dn(dn: &str) -> EmployeeDn {
    EmployeeDn::new(dn)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
