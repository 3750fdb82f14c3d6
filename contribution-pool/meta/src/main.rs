fn main() {
    multiversx_sc_meta_lib::cli_main::<contribution_pool::AbiProvider>();
}
