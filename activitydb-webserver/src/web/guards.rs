use std::path::PathBuf;

pub struct Version(pub &'static str);

pub struct FrontendDir(pub PathBuf);
