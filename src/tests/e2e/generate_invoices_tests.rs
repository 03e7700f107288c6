use crate::modules::invoicing::adapters::outbound::document_sink_in_memory::InMemoryDocumentSink;
use crate::modules::invoicing::adapters::outbound::document_sink_pdf::PdfDocumentSink;
use crate::modules::invoicing::adapters::outbound::entry_store::EntryStore;
use crate::modules::invoicing::adapters::outbound::entry_store_in_memory::InMemoryEntryStore;
use crate::modules::invoicing::core::entry::EntryId;
use crate::modules::invoicing::use_cases::authenticate::command::Authenticate;
use crate::modules::invoicing::use_cases::authenticate::handler::IdentityGate;
use crate::modules::invoicing::use_cases::generate_invoices::handler::GenerateInvoicesHandler;
use crate::modules::invoicing::use_cases::record_entry::handler::RecordEntryHandler;
use crate::shared::core::session::Session;
use crate::shared::infrastructure::identity::in_memory::InMemoryIdentityProvider;
use crate::shared::infrastructure::identity::{AuthMode, Credentials};
use crate::tests::fixtures::commands::record_entry::RecordEntryBuilder;
use chrono::NaiveDate;
use rust_decimal_macros::dec;
use std::sync::Arc;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

async fn signed_in() -> Session {
    let gate = IdentityGate::new(Arc::new(InMemoryIdentityProvider::new()));
    let mut session = Session::new();
    gate.authenticate(
        &mut session,
        Authenticate {
            credentials: Credentials {
                email: "owner@example.com".into(),
                password: "correct-horse".into(),
            },
            mode: AuthMode::Register,
        },
    )
    .await
    .unwrap();
    session
}

#[tokio::test]
async fn records_entries_and_generates_one_invoice_per_client() {
    let session = signed_in().await;
    let owner_id = session.current_identity().unwrap().id.clone();
    let store = Arc::new(InMemoryEntryStore::new());
    let documents = Arc::new(InMemoryDocumentSink::new());
    let record = RecordEntryHandler::new(store.clone());
    let generate = GenerateInvoicesHandler::new(store.clone(), documents.clone(), "EUR");

    record
        .handle(
            &session,
            RecordEntryBuilder::new()
                .hours(dec!(2))
                .rate(dec!(50))
                .material_cost(dec!(10))
                .build(),
        )
        .await
        .unwrap();
    record
        .handle(
            &session,
            RecordEntryBuilder::new()
                .date(NaiveDate::from_ymd_opt(2026, 10, 15).unwrap())
                .description("Adjust doors")
                .hours(dec!(1))
                .rate(dec!(50))
                .materials("")
                .material_cost(dec!(0))
                .build(),
        )
        .await
        .unwrap();

    let outcome = generate.handle(&session, today()).await.unwrap();

    assert_eq!(outcome.invoices.len(), 1);
    assert_eq!(outcome.invoices[0].invoice_number, "INV-20261016-ACM");
    assert_eq!(outcome.invoices[0].total, dec!(160));

    let written = documents.documents_of(&owner_id).await;
    assert_eq!(written.len(), 1);
    assert_eq!(
        written[0].summary,
        vec![
            "Total Labor: EUR 150.00",
            "Total Materials: EUR 10.00",
            "TOTAL: EUR 160.00",
        ]
    );

    assert!(store.list_unbilled(&session, &owner_id).await.unwrap().is_empty());
}

#[tokio::test]
async fn generating_without_unbilled_entries_produces_nothing() {
    let session = signed_in().await;
    let owner_id = session.current_identity().unwrap().id.clone();
    let store = Arc::new(InMemoryEntryStore::new());
    let documents = Arc::new(InMemoryDocumentSink::new());
    let generate = GenerateInvoicesHandler::new(store.clone(), documents.clone(), "EUR");

    let outcome = generate.handle(&session, today()).await.unwrap();

    assert!(outcome.invoices.is_empty());
    assert!(outcome.billing.billed.is_empty());
    assert!(documents.documents_of(&owner_id).await.is_empty());
    assert_eq!(store.mark_billed_calls(), 0);
}

#[tokio::test]
async fn a_failed_billing_update_leaves_only_that_entry_unbilled() {
    let session = signed_in().await;
    let owner_id = session.current_identity().unwrap().id.clone();
    let store = Arc::new(InMemoryEntryStore::new());
    let documents = Arc::new(InMemoryDocumentSink::new());
    let record = RecordEntryHandler::new(store.clone());
    let generate = GenerateInvoicesHandler::new(store.clone(), documents.clone(), "EUR");

    let mut ids = Vec::new();
    for client in ["ACME", "ACME", "Globex"] {
        ids.push(
            record
                .handle(&session, RecordEntryBuilder::new().client(client).build())
                .await
                .unwrap(),
        );
    }
    let failing: EntryId = ids[1].clone();
    store.reject_updates_for(failing.clone()).await;

    let outcome = generate.handle(&session, today()).await.unwrap();

    assert_eq!(documents.documents_of(&owner_id).await.len(), 2);
    assert_eq!(outcome.billing.billed, vec![ids[0].clone(), ids[2].clone()]);
    assert_eq!(outcome.billing.failed.len(), 1);
    assert_eq!(outcome.billing.failed[0].entry_id, failing);

    let unbilled = store.list_unbilled(&session, &owner_id).await.unwrap();
    assert_eq!(unbilled.len(), 1);
    assert_eq!(unbilled[0].id, failing);

    // the next run invoices the leftover entry again
    let rerun = generate.handle(&session, today()).await.unwrap();
    assert_eq!(rerun.invoices.len(), 1);
    assert_eq!(rerun.invoices[0].client, "ACME");
}

#[tokio::test]
async fn writes_pdf_files_for_the_signed_in_owner() {
    let session = signed_in().await;
    let owner_id = session.current_identity().unwrap().id.clone();
    let output = tempfile::tempdir().unwrap();
    let store = Arc::new(InMemoryEntryStore::new());
    let record = RecordEntryHandler::new(store.clone());
    let generate = GenerateInvoicesHandler::new(
        store.clone(),
        Arc::new(PdfDocumentSink::new(output.path())),
        "EUR",
    );
    for client in ["Foo Inc", "Foxtrot"] {
        record
            .handle(&session, RecordEntryBuilder::new().client(client).build())
            .await
            .unwrap();
    }

    let outcome = generate.handle(&session, today()).await.unwrap();

    let files: Vec<&str> = outcome
        .invoices
        .iter()
        .map(|invoice| invoice.file_name.as_str())
        .collect();
    assert_eq!(
        files,
        vec!["Foo_Inc_INV-20261016-FOO.pdf", "Foxtrot_INV-20261016-FOX.pdf"]
    );
    for file in files {
        let bytes = std::fs::read(output.path().join(&owner_id).join(file)).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}

#[tokio::test]
async fn a_client_name_with_a_slash_does_not_block_other_clients() {
    let session = signed_in().await;
    let owner_id = session.current_identity().unwrap().id.clone();
    let output = tempfile::tempdir().unwrap();
    let store = Arc::new(InMemoryEntryStore::new());
    let record = RecordEntryHandler::new(store.clone());
    let generate = GenerateInvoicesHandler::new(
        store.clone(),
        Arc::new(PdfDocumentSink::new(output.path())),
        "EUR",
    );
    for client in ["A/S Nordic", "Globex"] {
        record
            .handle(&session, RecordEntryBuilder::new().client(client).build())
            .await
            .unwrap();
    }

    let outcome = generate.handle(&session, today()).await.unwrap();

    assert_eq!(outcome.invoices.len(), 2);
    assert!(outcome.billing.is_complete());
    assert!(store.list_unbilled(&session, &owner_id).await.unwrap().is_empty());
    let owner_dir = output.path().join(&owner_id);
    assert!(owner_dir.join("A_S_Nordic_INV-20261016-A_S.pdf").is_file());
    assert!(owner_dir.join("Globex_INV-20261016-GLO.pdf").is_file());
}

#[tokio::test]
async fn a_second_run_on_the_same_day_keeps_the_first_document() {
    let session = signed_in().await;
    let owner_id = session.current_identity().unwrap().id.clone();
    let output = tempfile::tempdir().unwrap();
    let store = Arc::new(InMemoryEntryStore::new());
    let record = RecordEntryHandler::new(store.clone());
    let generate = GenerateInvoicesHandler::new(
        store.clone(),
        Arc::new(PdfDocumentSink::new(output.path())),
        "EUR",
    );

    let mut files = Vec::new();
    for _ in 0..2 {
        record
            .handle(&session, RecordEntryBuilder::new().build())
            .await
            .unwrap();
        let outcome = generate.handle(&session, today()).await.unwrap();
        files.push(outcome.invoices[0].file_name.clone());
    }

    assert_eq!(
        files,
        vec!["ACME_INV-20261016-ACM.pdf", "ACME_INV-20261016-ACM-2.pdf"]
    );
    let on_disk = std::fs::read_dir(output.path().join(&owner_id)).unwrap().count();
    assert_eq!(on_disk, 2);
}
