/// Status code `dpkg -l` prints for a package that is wanted and installed
pub const INSTALLED_STATUS: &str = "ii";

/// Architecture whose multi-arch installs are left out of every listing
pub const EXCLUDED_ARCHITECTURE: &str = "i386";

/// One row of a `dpkg -l` listing
///
/// Only the first three whitespace-separated fields matter:
/// status, `name[:arch]` and version. The description is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    status: String,
    name: String,
    architecture: Option<String>,
    version: String,
}

impl PackageRecord {
    /// Parses a single listing line
    ///
    /// Returns `None` for lines with fewer than three fields
    /// (blank lines, the `Desired=` legend, truncated rows).
    pub fn from_line(line: &str) -> Option<Self> {
        let mut fields = line.split_whitespace();
        let status = fields.next()?;
        let qualified_name = fields.next()?;
        let version = fields.next()?;

        let (name, architecture) = match qualified_name.split_once(':') {
            Some((name, arch)) => (name, Some(arch.to_string())),
            None => (qualified_name, None),
        };

        Some(Self {
            status: status.to_string(),
            name: name.to_string(),
            architecture,
            version: version.to_string(),
        })
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Package name with any `:arch` suffix removed
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn architecture(&self) -> Option<&str> {
        self.architecture.as_deref()
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn is_installed(&self) -> bool {
        self.status == INSTALLED_STATUS
    }

    pub fn has_excluded_architecture(&self) -> bool {
        self.architecture() == Some(EXCLUDED_ARCHITECTURE)
    }

    pub fn into_entry(self) -> (String, String) {
        (self.name, self.version)
    }
}
