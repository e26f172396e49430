#![cfg(all(feature = "visa-sdk", feature = "hardware_tests"))]

//! VISA hardware smoke test.
//!
//! Run with:
//! `VISA_SMOKE_TEST=1 VISA_TEST_RESOURCE="USB0::0x0957::0x5407::MY59002371::0::INSTR" cargo test -p visa-sys --test hardware_smoke --features hardware_tests -- --nocapture`

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use anyhow::{bail, Context, Result};
use visa_sys::*;

fn enabled() -> bool {
    if std::env::var("VISA_SMOKE_TEST").unwrap_or_default() != "1" {
        eprintln!("Skipping VISA hardware smoke test (set VISA_SMOKE_TEST=1 to enable)");
        return false;
    }
    true
}

fn status_desc(session: ViSession, status: ViStatus) -> String {
    let mut desc = [0 as c_char; 256];
    unsafe {
        viStatusDesc(session as _, status, desc.as_mut_ptr());
        CStr::from_ptr(desc.as_ptr()).to_string_lossy().into_owned()
    }
}

fn check(session: ViSession, status: ViStatus, what: &str) -> Result<()> {
    if status < 0 {
        bail!("{what} failed: {status:#x} ({})", status_desc(session, status));
    }
    Ok(())
}

#[test]
fn open_and_close_default_resource_manager() -> Result<()> {
    if !enabled() {
        return Ok(());
    }

    let mut rm: ViSession = 0;
    unsafe {
        check(rm, viOpenDefaultRM(&mut rm), "viOpenDefaultRM")?;
        check(rm, viClose(rm as _), "viClose(rm)")?;
    }
    Ok(())
}

#[test]
fn find_resources() -> Result<()> {
    if !enabled() {
        return Ok(());
    }

    let mut rm: ViSession = 0;
    let mut list: ViFindList = 0;
    let mut count: ViUInt32 = 0;
    let mut name = [0 as c_char; VI_FIND_BUFLEN as usize];
    let expr = CString::new("?*INSTR")?;

    unsafe {
        check(rm, viOpenDefaultRM(&mut rm), "viOpenDefaultRM")?;
        let status = viFindRsrc(rm, expr.as_ptr(), &mut list, &mut count, name.as_mut_ptr());
        if status >= 0 {
            eprintln!("found {count} resource(s)");
            for _ in 1..count {
                eprintln!("  {}", CStr::from_ptr(name.as_ptr()).to_string_lossy());
                check(rm, viFindNext(list, name.as_mut_ptr()), "viFindNext")?;
            }
            eprintln!("  {}", CStr::from_ptr(name.as_ptr()).to_string_lossy());
            viClose(list as _);
        } else {
            eprintln!("no resources found: {}", status_desc(rm, status));
        }
        check(rm, viClose(rm as _), "viClose(rm)")?;
    }
    Ok(())
}

#[test]
fn open_session_and_query_identity() -> Result<()> {
    if !enabled() {
        return Ok(());
    }
    let resource = std::env::var("VISA_TEST_RESOURCE")
        .context("set VISA_TEST_RESOURCE to the instrument's VISA address")?;
    let resource = CString::new(resource)?;

    let mut rm: ViSession = 0;
    let mut session: ViSession = 0;
    unsafe {
        check(rm, viOpenDefaultRM(&mut rm), "viOpenDefaultRM")?;
        check(
            rm,
            viOpen(rm, resource.as_ptr(), VI_NULL as _, VI_NULL as _, &mut session),
            "viOpen",
        )?;
        check(
            session,
            viSetAttribute(session as _, VI_ATTR_TMO_VALUE as _, 5000),
            "viSetAttribute(VI_ATTR_TMO_VALUE)",
        )?;

        let query = b"*IDN?\n";
        let mut written: ViUInt32 = 0;
        check(
            session,
            viWrite(session, query.as_ptr() as _, query.len() as ViUInt32, &mut written),
            "viWrite",
        )?;

        let mut buf = [0u8; 256];
        let mut read: ViUInt32 = 0;
        check(
            session,
            viRead(session, buf.as_mut_ptr() as _, buf.len() as ViUInt32, &mut read),
            "viRead",
        )?;
        let idn = String::from_utf8_lossy(&buf[..read as usize]);
        eprintln!("*IDN? -> {}", idn.trim());
        assert!(!idn.trim().is_empty(), "empty identification response");

        check(session, viClose(session as _), "viClose(session)")?;
        check(rm, viClose(rm as _), "viClose(rm)")?;
    }
    Ok(())
}
