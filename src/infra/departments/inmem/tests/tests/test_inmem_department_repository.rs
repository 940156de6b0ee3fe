// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use phonebook_departments::*;
use phonebook_departments_inmem::InMemoryDepartmentRepository;
use pretty_assertions::assert_eq;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_create_and_get() {
    let repo = InMemoryDepartmentRepository::new();

    let department = repo
        .create_department(&NewDepartment::new("Sales"), true)
        .await
        .unwrap();
    assert_eq!(department.extension, None);
    assert!(department.has_block_guard);

    let extension = repo
        .create_extension(department.id, "Sales (HQ)", None)
        .await
        .unwrap();
    assert_eq!((extension.lft, extension.rght), (1, 2));

    let department = repo.get_department(department.id).await.unwrap();
    assert_eq!(department.value, "Sales");
    assert_eq!(department.extension_name(), Some("Sales (HQ)"));

    assert!(matches!(
        repo.get_department(DepartmentID::new(42)).await,
        Err(GetDepartmentError::NotFound(DepartmentNotFoundError { department_id }))
            if department_id == DepartmentID::new(42)
    ));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_values_are_unique() {
    let repo = InMemoryDepartmentRepository::new();

    let sales = repo
        .create_department(&NewDepartment::new("Sales"), true)
        .await
        .unwrap();
    let it = repo
        .create_department(&NewDepartment::new("IT"), true)
        .await
        .unwrap();

    assert!(matches!(
        repo.create_department(&NewDepartment::new("Sales"), true).await,
        Err(CreateDepartmentError::Duplicate(_))
    ));
    assert!(matches!(
        repo.update_department(
            it.id,
            &DepartmentUpdate {
                value: Some("Sales".to_string()),
                ..Default::default()
            }
        )
        .await,
        Err(UpdateDepartmentError::Duplicate(_))
    ));

    // Re-saving the same value is not a conflict
    let sales = repo
        .update_department(
            sales.id,
            &DepartmentUpdate {
                value: Some("Sales".to_string()),
                block: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(sales.block);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_extension_constraints() {
    let repo = InMemoryDepartmentRepository::new();
    let sales = repo
        .create_department(&NewDepartment::new("Sales"), true)
        .await
        .unwrap();

    assert!(matches!(
        repo.create_extension(DepartmentID::new(42), "Ghost", None)
            .await,
        Err(CreateDepartmentExtensionError::NotFound(_))
    ));
    assert!(matches!(
        repo.create_extension(sales.id, "Sales", Some(DepartmentExtensionID::new(42)))
            .await,
        Err(CreateDepartmentExtensionError::ParentNotFound { .. })
    ));

    repo.create_extension(sales.id, "Sales", None).await.unwrap();

    assert!(matches!(
        repo.create_extension(sales.id, "Sales again", None).await,
        Err(CreateDepartmentExtensionError::AlreadyExists { .. })
    ));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_tree_is_maintained() {
    let repo = InMemoryDepartmentRepository::new();

    let head = create_with_extension(&repo, "HQ", "Head office", None).await;
    let head_ext = head.extension.clone().unwrap().id;
    let sales = create_with_extension(&repo, "Sales", "Sales", Some(head_ext)).await;
    let retail = create_with_extension(
        &repo,
        "Retail",
        "Retail sales",
        Some(sales.extension.clone().unwrap().id),
    )
    .await;
    let accounting = create_with_extension(&repo, "Acc", "Accounting", Some(head_ext)).await;

    assert_eq!(
        bounds(&repo).await,
        vec![
            ("HQ".to_string(), 1, 8),
            ("Sales".to_string(), 4, 7),
            ("Retail".to_string(), 5, 6),
            ("Acc".to_string(), 2, 3),
        ]
    );

    // Renaming the extension reorders siblings
    repo.update_department(
        accounting.id,
        &DepartmentUpdate {
            extension_name: Some("Treasury".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(
        bounds(&repo).await,
        vec![
            ("HQ".to_string(), 1, 8),
            ("Sales".to_string(), 2, 5),
            ("Retail".to_string(), 3, 4),
            ("Acc".to_string(), 6, 7),
        ]
    );

    // Deleting a node re-attaches its children to the parent
    let deleted = repo.delete_department(sales.id).await.unwrap();
    assert_eq!(deleted.value, "Sales");

    let retail = repo.get_department(retail.id).await.unwrap();
    assert_eq!(retail.extension.unwrap().parent_id, Some(head_ext));
    assert_eq!(
        bounds(&repo).await,
        vec![
            ("HQ".to_string(), 1, 6),
            ("Retail".to_string(), 2, 3),
            ("Acc".to_string(), 4, 5),
        ]
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_delete_cascades_to_extension() {
    let repo = InMemoryDepartmentRepository::new();
    let sales = create_with_extension(&repo, "Sales", "Sales (HQ)", None).await;

    let deleted = repo.delete_department(sales.id).await.unwrap();
    assert_eq!(deleted.extension_name(), Some("Sales (HQ)"));

    assert!(repo.list_departments().await.unwrap().is_empty());
    assert!(matches!(
        repo.delete_department(sales.id).await,
        Err(DeleteDepartmentRecordError::NotFound(_))
    ));

    // The department id is free of leftovers: a new extension can be attached
    // to a department created afterwards
    let it = repo
        .create_department(&NewDepartment::new("IT"), true)
        .await
        .unwrap();
    let extension = repo.create_extension(it.id, "IT", None).await.unwrap();
    assert_eq!((extension.lft, extension.rght), (1, 2));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_create_stores_extension_in_same_step() {
    let repo = InMemoryDepartmentRepository::new();

    let head = repo
        .create_department(
            &NewDepartment::new("HQ").with_extension_name("Head office"),
            true,
        )
        .await
        .unwrap();
    let head_extension = head.extension.clone().unwrap();
    assert_eq!(head_extension.name, "Head office");

    let sales = repo
        .create_department(
            &NewDepartment {
                parent_id: Some(head_extension.id),
                ..NewDepartment::new("Sales")
            },
            true,
        )
        .await
        .unwrap();
    let sales_extension = sales.extension.unwrap();
    assert_eq!(sales_extension.name, "Sales");
    assert_eq!(sales_extension.parent_id, Some(head_extension.id));
    assert_eq!((sales_extension.lft, sales_extension.rght), (2, 3));
}

#[test_log::test(tokio::test)]
async fn test_create_with_missing_parent_stores_nothing() {
    let repo = InMemoryDepartmentRepository::new();

    assert!(matches!(
        repo.create_department(
            &NewDepartment {
                parent_id: Some(DepartmentExtensionID::new(999)),
                ..NewDepartment::new("Ops")
            },
            true,
        )
        .await,
        Err(CreateDepartmentError::ParentNotFound { parent_id })
            if parent_id == DepartmentExtensionID::new(999)
    ));
    assert!(repo.list_departments().await.unwrap().is_empty());

    let ops = repo
        .create_department(&NewDepartment::new("Ops"), true)
        .await
        .unwrap();
    assert_eq!(ops.value, "Ops");
}

#[test_log::test(tokio::test)]
async fn test_delete_checks_block_guard_atomically() {
    let repo = InMemoryDepartmentRepository::new();
    let sales = repo
        .create_department(&NewDepartment::new("Sales"), true)
        .await
        .unwrap();

    assert!(matches!(
        repo.delete_department(sales.id).await,
        Err(DeleteDepartmentRecordError::NotPermitted(DeleteNotPermittedError { department_id }))
            if department_id == sales.id
    ));
    assert!(repo.get_department(sales.id).await.is_ok());

    repo.update_department(sales.id, &DepartmentUpdate::block())
        .await
        .unwrap();
    // Unblocking again before the delete re-arms the guard
    repo.update_department(
        sales.id,
        &DepartmentUpdate {
            block: Some(false),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert!(matches!(
        repo.delete_department(sales.id).await,
        Err(DeleteDepartmentRecordError::NotPermitted(_))
    ));

    repo.update_department(sales.id, &DepartmentUpdate::block())
        .await
        .unwrap();
    repo.delete_department(sales.id).await.unwrap();

    let unguarded = repo
        .create_department(&NewDepartment::new("IT"), false)
        .await
        .unwrap();
    repo.delete_department(unguarded.id).await.unwrap();
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

async fn create_with_extension(
    repo: &InMemoryDepartmentRepository,
    value: &str,
    extension_name: &str,
    parent_id: Option<DepartmentExtensionID>,
) -> Department {
    let department = repo
        .create_department(&NewDepartment::new(value), false)
        .await
        .unwrap();
    repo.create_extension(department.id, extension_name, parent_id)
        .await
        .unwrap();
    repo.get_department(department.id).await.unwrap()
}

async fn bounds(repo: &InMemoryDepartmentRepository) -> Vec<(String, u64, u64)> {
    repo.list_departments()
        .await
        .unwrap()
        .into_iter()
        .map(|d| {
            let extension = d.extension.unwrap();
            (d.value, extension.lft, extension.rght)
        })
        .collect()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
