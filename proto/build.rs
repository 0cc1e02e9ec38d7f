#[cfg(feature = "generate")]
fn main() {
    tonic_build::configure()
        .build_server(false)
        .out_dir("src") // you can change the generated code's location
        .compile(
            &[
                "googleapis/google/firestore/v1/firestore.proto",
                "googleapis/google/firestore/v1/document.proto",
                "googleapis/google/firestore/v1/query.proto",
                "googleapis/google/firestore/v1/write.proto",
            ],
            &["googleapis"], // specify the root location to search proto dependencies
        )
        .unwrap();
}

#[cfg(not(feature = "generate"))]
fn main() {}
