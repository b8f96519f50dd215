// Copyright 2019-2023 ChainX Project Authors. Licensed under GPL-3.0.

#[cfg(feature = "std")]
fn main() {
    substrate_wasm_builder::WasmBuilder::new()
        .with_current_project()
        .export_heap_base()
        .import_memory()
        .build();
}

#[cfg(not(feature = "std"))]
fn main() {}
