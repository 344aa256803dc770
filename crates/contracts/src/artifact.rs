//! Runtime loading of Hardhat build artifacts.
//!
//! A build artifact is the JSON file the contract toolchain writes per
//! compiled contract (`artifacts/contracts/<source>.sol/<Name>.json`).
//! Deployment only needs three of its fields: the contract name, the ABI and
//! the creation bytecode.

use {
    alloy::primitives::Bytes,
    alloy_json_abi::JsonAbi,
    anyhow::{Context, Result, bail, ensure},
    serde::Deserialize,
    std::path::{Path, PathBuf},
};

/// The compiled interface of a named contract.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub contract_name: String,
    pub abi: JsonAbi,
    pub bytecode: Bytes,
}

impl Artifact {
    /// Parses a single build-artifact file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read artifact {path:?}"))?;
        let artifact: Self = serde_json::from_str(&content)
            .with_context(|| format!("malformed artifact {path:?}"))?;
        artifact.ensure_deployable()?;
        Ok(artifact)
    }

    /// Resolves the artifact for the contract `name` from `path`, which is
    /// either a single artifact file or a Hardhat artifacts directory.
    pub fn resolve(path: &Path, name: &str) -> Result<Self> {
        let file = if path.is_file() {
            path.to_path_buf()
        } else {
            find_artifact_file(path, name)?
        };
        let artifact = Self::from_file(&file)?;
        ensure!(
            artifact.contract_name == name,
            "artifact {file:?} is for contract {}, expected {name}",
            artifact.contract_name,
        );
        Ok(artifact)
    }

    /// The creation transaction is sent without constructor arguments, so
    /// only artifacts whose constructor takes none and which carry creation
    /// bytecode can be deployed.
    fn ensure_deployable(&self) -> Result<()> {
        if let Some(constructor) = &self.abi.constructor {
            ensure!(
                constructor.inputs.is_empty(),
                "contract {} takes {} constructor arguments, deployment passes none",
                self.contract_name,
                constructor.inputs.len(),
            );
        }
        ensure!(
            !self.bytecode.is_empty(),
            "contract {} has no creation bytecode (interface or abstract contract)",
            self.contract_name,
        );
        Ok(())
    }
}

/// Walks a Hardhat artifacts directory looking for `<name>.json`. Debug
/// artifacts (`<name>.dbg.json`) never match because the file name is
/// compared in full.
fn find_artifact_file(root: &Path, name: &str) -> Result<PathBuf> {
    let target = format!("{name}.json");
    let mut pending = vec![root.to_path_buf()];
    while let Some(dir) = pending.pop() {
        let entries = std::fs::read_dir(&dir)
            .with_context(|| format!("failed to list artifacts directory {dir:?}"))?;
        for entry in entries {
            let path = entry?.path();
            if path.is_dir() {
                pending.push(path);
            } else if path.file_name() == Some(std::ffi::OsStr::new(&target)) {
                return Ok(path);
            }
        }
    }
    bail!("no artifact for contract {name} under {root:?}")
}
