use thiserror::Error;

/// Errors reported by the loaders and by animation/scene lookups.
///
/// Collision resolution never fails; everything here comes from reading
/// declarative files or asking for something that was never declared.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading the source failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// The document is not valid JSON or does not match the expected layout.
    #[error("malformed document: {0}")]
    Parse(#[from] serde_json::Error),
    /// Only version `"1"` is understood.
    #[error("version \"{0}\" not supported")]
    UnsupportedVersion(String),
    /// The file declares none of the entries it exists to provide.
    #[error("file must declare at least one {what}, none found")]
    EmptyDeclaration { what: &'static str },
    /// A shape entry names a type other than `"box"`.
    #[error("shape type \"{0}\" is not supported")]
    UnsupportedShapeType(String),
    /// A shape entry of a known type carries unusable values.
    #[error("values of shape type \"{shape_type}\" are not valid: {source}")]
    InvalidShapeParameters {
        shape_type: String,
        #[source]
        source: serde_json::Error,
    },
    /// An animation declares zero frames.
    #[error("animation \"{id}\" has no frames")]
    NoFrames { id: String },
    /// A grid tile points past the end of its asset strip.
    #[error("tile asset {asset} out of range (quantity {quantity})")]
    InvalidTileAsset { asset: usize, quantity: usize },
    /// The requested animation id is not registered.
    #[error("animation \"{0}\" does not exist")]
    MissingAnimation(String),
    /// The animation exists but has no shape for the requested frame.
    #[error("animation \"{id}\" has no bounds for frame {frame}")]
    MissingFrame { id: String, frame: usize },
    /// A scene returned the name of a scene nobody registered.
    #[error("scene \"{0}\" is not registered")]
    UnknownScene(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Version string accepted by every file format.
pub(crate) const SUPPORTED_VERSION: &str = "1";

pub(crate) fn check_version(found: &str) -> Result<()> {
    if found == SUPPORTED_VERSION {
        Ok(())
    } else {
        tracing::warn!(version = found, "rejecting document with unsupported version");
        Err(Error::UnsupportedVersion(found.to_owned()))
    }
}
