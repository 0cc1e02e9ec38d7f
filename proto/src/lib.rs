#![allow(clippy::doc_lazy_continuation)]
#![allow(clippy::doc_overindented_list_items)]
#![allow(clippy::large_enum_variant)]

#[path = "google.rpc.rs"]
pub mod rpc;

#[path = "google.r#type.rs"]
pub mod r#type;

#[path = ""]
pub mod firestore {
    #[path = "google.firestore.v1.rs"]
    pub mod v1;
}
