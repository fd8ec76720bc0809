// ABOUTME: Integration tests for the siteinfo-cli binary.
// ABOUTME: Covers local HTML parsing, partial-record JSON output, and argument validation.

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo::CommandCargoExt;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn siteinfo_cmd() -> Command {
    Command::cargo_bin("siteinfo-cli").unwrap()
}

/// A minimal page where every section is present, one row each.
const COMPLETE_HTML: &str = r##"<!DOCTYPE html>
<html><body>
<div class="row-fluid siteinfo-site-summary">
  <span><div><p>Example Site</p></div></span>
  <span>
    <span class="globleRank"><span><div><strong>1,001</strong></div></span></span>
    <span class="countryRank"><span><h4><a href="#">Ruritania</a></h4><div><strong>7</strong></div></span></span>
  </span>
</div>
<table id="demographics_div_country_table"><tbody>
  <tr><td><a href="#">Ruritania</a></td><td><span>90.0%</span></td><td><span>7</span></td></tr>
</tbody></table>
<table id="keywords_top_keywords_table"><tbody>
  <tr><td><span>1.</span><span>example</span></td><td><span>42.0%</span></td></tr>
</tbody></table>
<table id="keywords_upstream_site_table"><tbody>
  <tr><td><a href="#">search.example</a></td><td><span>12.0%</span></td></tr>
</tbody></table>
<section id="linksin-panel-content">
  <div><span><div><span class="font-4 box1-r">321</span></div></span></div>
  <table id="linksin_table"><tbody>
    <tr><td><span class="word-wrap"><a href="#">blog.example</a></span></td>
        <td><a class="word-wrap" href="http://blog.example/post">blog.example/post</a></td></tr>
  </tbody></table>
</section>
<table id="audience_overlap_table"><tbody>
  <tr><td><a href="#">similar.example</a></td></tr>
</tbody></table>
<table id="category_link_table"><tbody>
  <tr><td><a href="#">World</a><a href="#">Examples</a></td></tr>
</tbody></table>
<table id="subdomain_table"><tbody>
  <tr><td><span>www.example.com</span></td><td><span>99.0%</span></td></tr>
</tbody></table>
<section id="contact-panel-content">
  <div class="row-fluid"><span class="span8"><p class="color-s3">An example site.</p></span></div>
</section>
</body></html>"##;

#[test]
fn parse_complete_html_file_succeeds() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = temp_dir.path().join("complete.html");
    fs::write(&html_path, COMPLETE_HTML).unwrap();

    siteinfo_cmd()
        .arg("--html")
        .arg(&html_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"ok\": true"))
        .stdout(predicate::str::contains("\"global_rank\": 1001"))
        .stdout(predicate::str::contains("\"main_country\": \"Ruritania\""))
        .stdout(predicate::str::contains("\"word\": \"example\""));
}

#[test]
fn partial_page_prints_partial_record_and_fails() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = temp_dir.path().join("partial.html");

    // Only the global rank is present; extraction halts at the local rank.
    let html = r#"<html><body>
        <span class="globleRank"><span><div><strong>506</strong></div></span></span>
    </body></html>"#;
    fs::write(&html_path, html).unwrap();

    siteinfo_cmd()
        .arg("--html")
        .arg(&html_path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"ok\": false"))
        .stdout(predicate::str::contains("\"global_rank\": 506"))
        .stdout(predicate::str::contains("local rank"));
}

#[test]
fn no_data_page_reports_insufficient_data() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = temp_dir.path().join("nodata.html");

    let html = r#"<html><body><section id="no-enough-data"><p>nothing</p></section></body></html>"#;
    fs::write(&html_path, html).unwrap();

    siteinfo_cmd()
        .arg("--html")
        .arg(&html_path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("insufficient data"));
}

#[test]
fn compact_flag_emits_compact_json() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = temp_dir.path().join("complete.html");
    fs::write(&html_path, COMPLETE_HTML).unwrap();

    siteinfo_cmd()
        .arg("--html")
        .arg(&html_path)
        .arg("--compact")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"ok\":true"));
}

#[test]
fn no_args_fails() {
    siteinfo_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one domain is required"));
}

#[test]
fn html_and_domains_together_fail() {
    siteinfo_cmd()
        .arg("--html")
        .arg("whatever.html")
        .arg("example.com")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot use both"));
}
