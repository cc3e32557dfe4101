use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use tempfile::TempDir;

const TEMPLATES: [&str; 7] = [
    "featureTemplate.h",
    "featureTemplate.cpp",
    "commandTemplate.h",
    "commandTemplate.cpp",
    "commandViewTemplate.h",
    "commandViewTemplate.cpp",
    "serialTemplate.xsd",
];

const OUTPUT_DIRS: [&str; 4] = ["feature", "command", "commandview", "project/serial/schema"];

/// `<root>/tools` holds the templates and is the working directory of every run.
struct Workspace {
    root: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let root = TempDir::new().unwrap();
        let tools = root.path().join("tools");
        fs::create_dir(&tools).unwrap();
        for template in TEMPLATES {
            fs::write(
                tools.join(template),
                "/* Copyright (C) %YEAR% */\n\
                 #ifndef CMD_%CLASSNAMEUPPERCASE%_H\n\
                 class %CLASSNAME% {};\n\
                 // see %CLASSNAMELOWERCASE%.h\n",
            )
            .unwrap();
        }
        for dir in OUTPUT_DIRS {
            fs::create_dir_all(root.path().join(dir)).unwrap();
        }
        Self { root }
    }

    fn tools(&self) -> PathBuf {
        self.root.path().join("tools")
    }

    fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_generate"))
            .args(args)
            .current_dir(self.tools())
            .env_remove("RUST_LOG")
            .output()
            .unwrap()
    }

    fn generated(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();
        for dir in OUTPUT_DIRS {
            let Ok(entries) = fs::read_dir(self.path(dir)) else {
                continue;
            };
            for entry in entries {
                let path = entry.unwrap().path();
                if path.is_file() {
                    files.push(path);
                }
            }
        }
        files.sort();
        files
    }
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn no_arguments_is_a_usage_error() {
    let ws = Workspace::new();

    let output = ws.run(&[]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("ERROR: Wrong number of arguments"));
    assert!(stderr(&output).contains("Examples:"));
    assert!(ws.generated().is_empty());
}

#[test]
fn flag_like_class_name_is_a_usage_error() {
    let ws = Workspace::new();

    let output = ws.run(&["--", "-MyFeature"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("invalid classname"));
    assert!(stderr(&output).contains("Examples:"));
    assert!(ws.generated().is_empty());
}

#[test]
fn leading_flag_instead_of_class_name_fails() {
    let ws = Workspace::new();

    for first in ["--feature", "-MyFeature"] {
        let output = ws.run(&[first]);

        assert_eq!(output.status.code(), Some(2), "{first}");
        assert!(stderr(&output).contains("ERROR: invalid classname"));
        assert!(stderr(&output).contains("Examples:"));
        assert!(ws.generated().is_empty());
    }
}

#[test]
fn options_after_the_class_name_select_nothing() {
    let ws = Workspace::new();
    fs::remove_dir(ws.path("commandview")).unwrap();

    let output = ws.run(&["MyFeature", "--create-dirs"]);

    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).is_empty());
    assert!(ws.generated().is_empty());
    assert!(!ws.path("commandview").exists());

    let output = ws.run(&["MyFeature", "--dry-run"]);

    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).is_empty());
    assert!(ws.generated().is_empty());
}

#[test]
fn generates_all_files_by_default() {
    let ws = Workspace::new();

    let output = ws.run(&["MyFeature"]);

    assert!(output.status.success(), "{}", stderr(&output));
    let generated = ws.generated();
    assert_eq!(generated.len(), 7);
    for file in &generated {
        let content = read(file);
        assert!(content.contains("#ifndef CMD_MYFEATURE_H"));
        assert!(content.contains("class MyFeature {};"));
        assert!(content.contains("// see myfeature.h"));
        for token in [
            "%YEAR%",
            "%CLASSNAME%",
            "%CLASSNAMELOWERCASE%",
            "%CLASSNAMEUPPERCASE%",
        ] {
            assert!(!content.contains(token), "{token} left in {file:?}");
        }
    }
    assert!(
        ws.path("project/serial/schema/prjsrl_FIX_myfeature.xsd")
            .is_file()
    );
    assert_eq!(stdout(&output).lines().count(), 7);
    assert!(stdout(&output).contains("../feature/ftrmyfeature.h"));
}

#[test]
fn command_flag_generates_only_command_files() {
    let ws = Workspace::new();

    let output = ws.run(&["MyFeature", "--command"]);

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(
        ws.generated(),
        vec![
            ws.path("command/cmdmyfeature.cpp"),
            ws.path("command/cmdmyfeature.h"),
        ]
    );
    let header = read(&ws.path("command/cmdmyfeature.h"));
    assert!(header.contains("class MyFeature {};"));
    assert!(header.contains("CMD_MYFEATURE_H"));
    assert!(header.contains("myfeature.h"));
}

#[test]
fn unknown_flags_are_ignored() {
    let ws = Workspace::new();

    let output = ws.run(&["Blend", "--dialog", "--commandView"]);

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(
        ws.generated(),
        vec![ws.path("commandview/cmvblend.cpp"), ws.path("commandview/cmvblend.h")]
    );
}

#[test]
fn missing_template_fails_without_writing() {
    let ws = Workspace::new();
    fs::remove_file(ws.tools().join("serialTemplate.xsd")).unwrap();

    for _ in 0..2 {
        let output = ws.run(&["MyFeature"]);
        assert_eq!(output.status.code(), Some(1));
        assert!(stderr(&output).contains("serialTemplate.xsd"));
        assert!(ws.generated().is_empty());
    }
}

#[test]
fn missing_output_directory_fails_unless_created() {
    let ws = Workspace::new();
    fs::remove_dir(ws.path("commandview")).unwrap();

    let output = ws.run(&["MyFeature"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("commandview"));
    assert!(ws.generated().is_empty());

    let output = ws.run(&["--create-dirs", "MyFeature"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(ws.generated().len(), 7);
}

#[test]
fn dry_run_lists_without_writing() {
    let ws = Workspace::new();

    let output = ws.run(&["--dry-run", "MyFeature", "--serial"]);

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(
        stdout(&output).trim(),
        "would write ../project/serial/schema/prjsrl_FIX_myfeature.xsd"
    );
    assert!(ws.generated().is_empty());
}

#[test]
fn template_dir_option_replaces_working_directory() {
    let ws = Workspace::new();

    let output = Command::new(env!("CARGO_BIN_EXE_generate"))
        .args(["-C", "tools", "Sweep", "--feature"])
        .current_dir(ws.root.path())
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(
        ws.generated(),
        vec![ws.path("feature/ftrsweep.cpp"), ws.path("feature/ftrsweep.h")]
    );
}

#[test]
fn config_file_replaces_the_table() {
    let ws = Workspace::new();
    fs::write(ws.tools().join("dialogTemplate.h"), "dlg_%CLASSNAMELOWERCASE%").unwrap();
    fs::write(
        ws.tools().join("generate.yaml"),
        "entries:\n  - name: dialog\n    flag: --dialog\n    files:\n      - template: dialogTemplate.h\n        output: ../feature/dlg%CLASSNAMELOWERCASE%.h\n",
    )
    .unwrap();

    let output = ws.run(&["Loft"]);

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(ws.generated(), vec![ws.path("feature/dlgloft.h")]);
    assert_eq!(read(&ws.path("feature/dlgloft.h")), "dlg_loft");
}
