use std::future::Future;

/// Runs `future` on a fresh multi-threaded runtime and returns its output.
///
/// The runtime is shut down without waiting for blocking tasks. Applets park
/// in uncancellable blocking waits on the mixer, so a normal runtime drop
/// would hang once the future has finished.
pub fn block_on_detached<F: Future>(future: F) -> std::io::Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_multi_thread().enable_all().build()?;
    let output = runtime.block_on(future);
    runtime.shutdown_background();
    Ok(output)
}
