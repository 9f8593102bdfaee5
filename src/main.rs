//! Host-side helper: `cargo run` builds the WASM package into `static/pkg`
//! and serves `static/` on a local port (`RINGS_PORT`, default 8000).

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    dev::run()
}

// The binary is meaningless in the browser; wasm-pack only builds the lib.
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
mod dev {
    use anyhow::{bail, Context};
    use std::env;
    use std::process::{Command, Stdio};

    const DEFAULT_PORT: u16 = 8000;

    pub fn run() -> anyhow::Result<()> {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

        let port = match env::var("RINGS_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("RINGS_PORT={raw:?} is not a port number"))?,
            Err(_) => DEFAULT_PORT,
        };

        log::info!("building WASM pkg …");
        match Command::new("wasm-pack")
            .args(["build", "--release", "--target", "web", "--out-dir", "static/pkg"])
            .status()
        {
            Ok(st) if st.success() => {}
            Ok(st) => bail!("wasm-pack failed ({st}); see output above"),
            Err(_) => log::warn!(
                "wasm-pack not found in PATH, serving existing static/pkg \
                 (install from https://rustwasm.github.io/wasm-pack/)"
            ),
        }

        log::info!("serving static/ at http://127.0.0.1:{port}");
        let status = Command::new("python3")
            .args(["-m", "http.server", &port.to_string(), "--directory", "static"])
            .stdout(Stdio::null())
            .stderr(Stdio::inherit())
            .status()
            .context("failed to start python3 http.server")?;
        if !status.success() {
            bail!("http server exited with {status}");
        }
        Ok(())
    }
}
