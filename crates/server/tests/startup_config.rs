//! Boot-time configuration handling; own test binary because it sets `CONFIG_PATH`.

#[tokio::test]
async fn invalid_config_file_aborts_startup() -> anyhow::Result<()> {
    let path = std::env::temp_dir().join(format!("comments_bad_config_{}.toml", std::process::id()));
    std::fs::write(
        &path,
        "[server]\nhost = \"127.0.0.1\"\nport = 0\n\n[database]\nurl = \"postgres://localhost:5432/comments\"\n",
    )?;
    std::env::set_var("CONFIG_PATH", &path);

    let res = server::run_with_shutdown(async {}).await;
    std::fs::remove_file(&path).ok();

    let err = res.expect_err("port = 0 must be rejected");
    assert!(err.to_string().contains("invalid configuration"), "unexpected error: {err}");
    Ok(())
}
