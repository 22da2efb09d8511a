#![allow(dead_code)]

use pdf_booklet::Result;
use pdf_booklet::tool::{CommandRunner, Invocation, ToolOutput};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub const TWO_PAGE_BOUNDS: &str = "\
PDFCROP 1.40, 2020/06/06 - Copyright (c) 2002-2020 by Heiko Oberdiek, Oberdiek Package Support Group.
* Running ghostscript for BoundingBox calculation ...
%%BoundingBox: 0 0 100 200
%%HiResBoundingBox: 0 0 100 200
%%BoundingBox: 10 5 90 190
%%HiResBoundingBox: 10 5 90 190
==> 2 pages written on `out.pdf'.
";

/// Stands in for pdfcrop, pdfjam, kpsewhich and soffice.
///
/// Records every invocation and creates the files the real tools would.
pub struct ScriptedRunner {
    pub bounds_stdout: String,
    pub bounds_stderr: String,
    pub crop_stderr: String,
    pub kpsewhich_stdout: String,
    pub pdfjam_writes_output: bool,
    /// File names soffice fails on
    pub soffice_failures: Vec<String>,
    calls: Mutex<Vec<Invocation>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self {
            bounds_stdout: TWO_PAGE_BOUNDS.to_string(),
            bounds_stderr: String::new(),
            crop_stderr: String::new(),
            kpsewhich_stdout: "/usr/share/texmf/tex/latex/everyshi/everyshi.sty\n".to_string(),
            pdfjam_writes_output: true,
            soffice_failures: Vec::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }

    pub fn programs(&self) -> Vec<String> {
        self.calls()
            .iter()
            .map(|c| c.program.to_string_lossy().into_owned())
            .collect()
    }

    pub fn calls_to(&self, program: &str) -> Vec<Invocation> {
        self.calls()
            .into_iter()
            .filter(|c| c.program.to_string_lossy() == program)
            .collect()
    }

    fn respond(&self, invocation: &Invocation) -> ToolOutput {
        let args = invocation.args_lossy();
        let program = invocation.program.to_string_lossy().into_owned();
        match program.as_str() {
            "pdfcrop" => {
                let verbose = args.iter().any(|a| a == "--verbose");
                let stderr = if verbose {
                    &self.bounds_stderr
                } else {
                    &self.crop_stderr
                };
                if stderr.is_empty() {
                    std::fs::write(args.last().unwrap(), b"%PDF-cropped").unwrap();
                }
                ToolOutput {
                    code: Some(if stderr.is_empty() { 0 } else { 1 }),
                    stdout: if verbose {
                        self.bounds_stdout.clone().into_bytes()
                    } else {
                        Vec::new()
                    },
                    stderr: stderr.clone().into_bytes(),
                }
            }
            "kpsewhich" => ToolOutput {
                code: Some(if self.kpsewhich_stdout.is_empty() { 1 } else { 0 }),
                stdout: self.kpsewhich_stdout.clone().into_bytes(),
                stderr: Vec::new(),
            },
            "pdfjam" => {
                let input = Path::new(&args[3]);
                let dir = invocation.current_dir.clone().unwrap();
                let stem = input.file_stem().unwrap().to_string_lossy().into_owned();
                // Relative inputs resolve against pdfjam's working directory
                if self.pdfjam_writes_output && dir.join(input).is_file() {
                    std::fs::write(dir.join(format!("{}-book.pdf", stem)), b"%PDF-booklet")
                        .unwrap();
                }
                ToolOutput {
                    code: Some(0),
                    stdout: Vec::new(),
                    stderr: b"  pdfjam: Finished.  Output was written to 'book.pdf'.\n".to_vec(),
                }
            }
            _ => {
                // soffice --headless --convert-to pdf --outdir DIR INPUT
                let input = PathBuf::from(args.last().unwrap());
                let name = input.file_name().unwrap().to_string_lossy().into_owned();
                if self.soffice_failures.contains(&name) {
                    return ToolOutput {
                        code: Some(1),
                        stdout: Vec::new(),
                        stderr: b"Error: source file could not be loaded\n".to_vec(),
                    };
                }
                let outdir = PathBuf::from(&args[4]);
                let mut pdf = outdir.join(input.file_stem().unwrap());
                pdf.set_extension("pdf");
                std::fs::write(pdf, b"%PDF-converted").unwrap();
                ToolOutput {
                    code: Some(0),
                    stdout: b"convert ok\n".to_vec(),
                    stderr: Vec::new(),
                }
            }
        }
    }
}

impl CommandRunner for ScriptedRunner {
    async fn run(&self, invocation: &Invocation) -> Result<ToolOutput> {
        self.calls.lock().unwrap().push(invocation.clone());
        Ok(self.respond(invocation))
    }
}

/// Write a placeholder input file and return its path
pub fn touch(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, b"%PDF-1.7 input").unwrap();
    path
}

/// Names of the entries directly inside `dir`, sorted
pub fn dir_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
