//! Version-computation output and display selection
//!
//! - `version_info`: structured output of the version-computation tool
//! - `version_kind`: which field of that output is shown in annotations

pub mod version_info;
pub mod version_kind;

pub const FULL_SEM_VER_FIELD: &str = "FullSemVer";

pub const VERSION_KIND_ALIASES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "semver" => "SemVer",
    "full" => "FullSemVer",
    "fullsemver" => "FullSemVer",
    "mmp" => "MajorMinorPatch",
    "majorminorpatch" => "MajorMinorPatch",
    "informational" => "InformationalVersion",
    "nuget" => "NuGetVersionV2",
};
