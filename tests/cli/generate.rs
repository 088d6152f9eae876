use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, entry_names};

const EXPECTED_API_RST: &str = "\
#############
API Reference
#############


****************
Geometry Library
****************

Bee
===

.. autoclass:: phidl.geometry.Bee
   :members:
   :inherited-members:
   :show-inheritance:


Gee
===

.. autoclass:: phidl.geometry.Gee
   :members:
   :inherited-members:
   :show-inheritance:


Zed(object)
===========

.. autoclass:: phidl.geometry.Zed(object)
   :members:
   :inherited-members:
   :show-inheritance:


A
=

.. autofunction:: phidl.geometry.A


F
=

.. autofunction:: phidl.geometry.F


";

#[test]
fn test_generate_with_defaults() -> Result<()> {
    let test = CliTest::with_geometry()?;

    assert_cli_snapshot!(test, test.generate_command());
    assert_eq!(test.api_rst()?, EXPECTED_API_RST);

    Ok(())
}

#[test]
fn test_generate_twice_replaces_document() -> Result<()> {
    let test = CliTest::with_geometry()?;

    test.generate_command().output()?;
    let output = test.generate_command().output()?;
    assert!(output.status.success());
    assert_eq!(test.api_rst()?, EXPECTED_API_RST);

    Ok(())
}

#[test]
fn test_generate_append_keeps_single_main_header() -> Result<()> {
    let test = CliTest::with_geometry()?;

    test.generate_command().output()?;
    let output = test.generate_command().arg("--append").output()?;
    assert!(output.status.success());

    let doc = test.api_rst()?;
    assert_eq!(doc.matches("\nAPI Reference\n").count(), 1);
    assert_eq!(doc.matches("\nGeometry Library\n").count(), 2);
    assert!(doc.starts_with(EXPECTED_API_RST));

    Ok(())
}

#[test]
fn test_generate_multiple_sources() -> Result<()> {
    let test = CliTest::with_geometry()?;
    test.write_file(
        "phidl/routing.py",
        "def route_basic(port1, port2):\ndef _arc(r):\nclass RoutingError(Exception):\n",
    )?;

    let mut cmd = test.generate_command();
    cmd.args(["geometry.py", "routing.py"]);
    assert_cli_snapshot!(test, cmd);

    let doc = test.api_rst()?;
    assert_eq!(
        entry_names(&doc),
        vec![
            "Bee",
            "Gee",
            "Zed(object)",
            "A",
            "F",
            "RoutingError(Exception)",
            "route_basic"
        ]
    );
    assert_eq!(doc.matches("API Reference").count(), 1);
    assert!(doc.contains("\nRouting Library\n"));

    Ok(())
}

#[test]
fn test_generate_glob_sources() -> Result<()> {
    let test = CliTest::with_geometry()?;
    test.write_file("phidl/quickplotter.py", "def quickplot(items):\n")?;
    test.write_file("phidl/README.md", "class NotPython:\n")?;

    let mut cmd = test.generate_command();
    cmd.arg("*.py");
    assert_cli_snapshot!(test, cmd);

    let doc = test.api_rst()?;
    let geometry = doc.find("Geometry Library").expect("geometry section");
    let quickplotter = doc.find("Quickplotter Library").expect("quickplotter section");
    assert!(geometry < quickplotter);
    assert!(!doc.contains("NotPython"));

    Ok(())
}

#[test]
fn test_generate_glob_with_dot_relative_source_root() -> Result<()> {
    let test = CliTest::with_geometry()?;
    test.write_file("phidl/quickplotter.py", "def quickplot(items):\n")?;

    let output = test
        .generate_command()
        .args(["--source-root", "./phidl", "*.py"])
        .output()?;
    assert!(output.status.success());

    let doc = test.api_rst()?;
    assert!(doc.contains("\nGeometry Library\n"));
    assert!(doc.contains("\nQuickplotter Library\n"));

    Ok(())
}

#[test]
fn test_generate_with_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("mylib/shapes.py", "def circle(radius):\nclass Shape:\n")?;
    test.write_file(
        ".genapirc.json",
        r#"{
            "sourceRoot": "./mylib",
            "outputRoot": "./docs",
            "sources": ["shapes.py"],
            "output": "reference.rst",
            "mainHeader": "Reference",
            "subHeader": null,
            "namespace": "mylib.shapes"
        }"#,
    )?;

    assert_cli_snapshot!(test, test.generate_command());

    assert_eq!(
        test.read_file("docs/reference.rst")?,
        "#########\nReference\n#########\n\n\n\
         ******\nShapes\n******\n\n\
         Shape\n=====\n\n\
         .. autoclass:: mylib.shapes.Shape\n   \
         :members:\n   \
         :inherited-members:\n   \
         :show-inheritance:\n\n\n\
         circle\n======\n\n\
         .. autofunction:: mylib.shapes.circle\n\n\n"
    );

    Ok(())
}

#[test]
fn test_cli_flags_override_config() -> Result<()> {
    let test = CliTest::with_geometry()?;
    test.write_file(".genapirc.json", r#"{ "namespace": "from.config" }"#)?;

    let output = test
        .generate_command()
        .args(["--namespace", "from.cli", "--sub-header", "Module"])
        .output()?;
    assert!(output.status.success());

    let doc = test.api_rst()?;
    assert!(doc.contains(".. autoclass:: from.cli.Bee\n"));
    assert!(!doc.contains("from.config"));
    assert!(doc.contains("\nGeometry Module\n"));

    Ok(())
}

#[test]
fn test_generate_dry_run_writes_nothing() -> Result<()> {
    let test = CliTest::with_geometry()?;

    let mut cmd = test.generate_command();
    cmd.arg("--dry-run");
    assert_cli_snapshot!(test, cmd);

    let output = test.generate_command().arg("--dry-run").output()?;
    assert_eq!(String::from_utf8(output.stdout)?, EXPECTED_API_RST);
    assert!(!test.root().join("docs/source/API.rst").exists());

    Ok(())
}

#[test]
fn test_generate_empty_source() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("phidl/geometry.py", "import numpy as np\n")?;

    let output = test.generate_command().output()?;
    assert!(output.status.success());
    assert_eq!(
        test.api_rst()?,
        "#############\nAPI Reference\n#############\n\n\n\
         ****************\nGeometry Library\n****************\n\n"
    );

    Ok(())
}

#[test]
fn test_generate_missing_source_fails() -> Result<()> {
    let test = CliTest::new()?;

    assert_cli_snapshot!(test, test.generate_command());

    Ok(())
}

#[test]
fn test_generate_unmatched_glob_fails() -> Result<()> {
    let test = CliTest::with_geometry()?;

    let mut cmd = test.generate_command();
    cmd.arg("*.pyx");
    assert_cli_snapshot!(test, cmd);

    Ok(())
}

#[test]
fn test_generate_invalid_config_fails() -> Result<()> {
    let test = CliTest::with_geometry()?;
    test.write_file(".genapirc.json", "{ not json")?;

    assert_cli_snapshot!(test, test.generate_command());

    Ok(())
}

#[test]
fn test_generate_verbose_reports_details() -> Result<()> {
    let test = CliTest::with_geometry()?;

    let mut cmd = test.generate_command();
    cmd.arg("-v");
    assert_cli_snapshot!(test, cmd);

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;
    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout)?.contains("Usage:"));

    Ok(())
}
