//! The root module for the tidy_shim package when compiled as a library.
//! This module mainly holds the declarations of this package's other modules.
//!
//! With the `python` feature enabled, a python binding is also defined here, and it is
//! exposed in python as `tidy_shim` in the python path.

#[cfg(feature = "python")]
use pyo3::prelude::*;

// project specific modules/crates
pub mod clang_tidy;
pub mod cli;
pub mod common_fs;
pub mod config;
pub mod error;
pub mod filter;
pub mod logger;
pub mod platform;
pub mod run;

#[cfg(feature = "python")]
fn to_py_err(e: regex::Error) -> PyErr {
    pyo3::exceptions::PyValueError::new_err(e.to_string())
}

/// A wrapper for [`run::run_main()`].
#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(name = "main")]
fn py_main(args: Vec<String>) -> PyResult<i32> {
    Ok(run::run_main(args))
}

/// A wrapper for [`filter::split_args()`].
#[cfg(feature = "python")]
#[pyfunction]
fn split_args(args: Vec<String>) -> (Vec<String>, Vec<String>) {
    filter::split_args(&args)
}

/// A wrapper for [`filter::filter_files_by_folder()`].
#[cfg(feature = "python")]
#[pyfunction]
fn filter_files_by_folder(folder: &str, args: Vec<String>) -> PyResult<Vec<String>> {
    filter::filter_files_by_folder(folder, &args).map_err(to_py_err)
}

/// A wrapper for [`filter::filter_files_by_ext()`].
#[cfg(feature = "python")]
#[pyfunction]
fn filter_files_by_ext(ext: &str, args: Vec<String>) -> PyResult<Vec<String>> {
    filter::filter_files_by_ext(ext, &args).map_err(to_py_err)
}

/// The python binding for the tidy_shim package. It exposes 2 submodules:
///
/// - ``tidy_shim.run`` whose only exposed function is used as the entrypoint script.
/// - ``tidy_shim.shim_utils`` with the argument filtering functions.
#[cfg(feature = "python")]
#[pymodule]
fn tidy_shim(_py: Python, m: &PyModule) -> PyResult<()> {
    let run_submodule = PyModule::new(_py, "run")?;
    run_submodule.add_function(wrap_pyfunction!(py_main, m)?)?;
    m.add_submodule(run_submodule)?;

    let utils_submodule = PyModule::new(_py, "shim_utils")?;
    utils_submodule.add_function(wrap_pyfunction!(split_args, m)?)?;
    utils_submodule.add_function(wrap_pyfunction!(filter_files_by_folder, m)?)?;
    utils_submodule.add_function(wrap_pyfunction!(filter_files_by_ext, m)?)?;
    m.add_submodule(utils_submodule)?;
    Ok(())
}
