use std::path::Path;

/// Flags shared by every Xpdf tool.
///
/// Anything the typed options don't model travels through `extra_args` /
/// `raw_args`, appended after the known flags so callers can extend or
/// override behavior; unknown fields are never promoted to flags implicitly.
#[derive(Debug, Clone, Default)]
pub struct CommonOptions {
    pub first_page: Option<u32>,
    pub last_page: Option<u32>,
    pub user_password: Option<String>,
    pub owner_password: Option<String>,
    pub quiet: bool,
    pub extra_args: Vec<String>,
    pub raw_args: Vec<String>,
}

pub(crate) fn apply_common_options(args: &mut Vec<String>, common: &CommonOptions) {
    if let Some(first) = common.first_page {
        args.push("-f".into());
        args.push(first.to_string());
    }
    if let Some(last) = common.last_page {
        args.push("-l".into());
        args.push(last.to_string());
    }
    if let Some(pw) = &common.user_password {
        args.push("-upw".into());
        args.push(pw.clone());
    }
    if let Some(pw) = &common.owner_password {
        args.push("-opw".into());
        args.push(pw.clone());
    }
    if common.quiet {
        args.push("-q".into());
    }
}

pub(crate) fn apply_passthrough(args: &mut Vec<String>, common: &CommonOptions) {
    args.extend(common.extra_args.iter().cloned());
    args.extend(common.raw_args.iter().cloned());
}

pub(crate) fn push_path(args: &mut Vec<String>, path: &Path) {
    args.push(path.to_string_lossy().into_owned());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_flags_in_fixed_order() {
        let common = CommonOptions {
            first_page: Some(2),
            last_page: Some(5),
            user_password: Some("u".into()),
            owner_password: Some("o".into()),
            quiet: true,
            ..Default::default()
        };
        let mut args = Vec::new();
        apply_common_options(&mut args, &common);
        assert_eq!(
            args,
            vec!["-f", "2", "-l", "5", "-upw", "u", "-opw", "o", "-q"]
        );
    }

    #[test]
    fn test_passthrough_keeps_extra_before_raw() {
        let common = CommonOptions {
            extra_args: vec!["-cfg".into(), "x.cfg".into()],
            raw_args: vec!["-verbose".into()],
            ..Default::default()
        };
        let mut args = Vec::new();
        apply_passthrough(&mut args, &common);
        assert_eq!(args, vec!["-cfg", "x.cfg", "-verbose"]);
    }

    #[test]
    fn test_defaults_add_nothing() {
        let mut args = Vec::new();
        apply_common_options(&mut args, &CommonOptions::default());
        apply_passthrough(&mut args, &CommonOptions::default());
        assert!(args.is_empty());
    }
}
