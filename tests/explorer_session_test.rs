use anyhow::Result;
use nohrs_term::{Explorer, ExplorerOptions, MenuProfile, Session};
use std::fs;
use std::io::Cursor;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use tempfile::tempdir;

fn run_script(start: &Path, options: ExplorerOptions, script: &str) -> Result<(String, Session)> {
    let session = Session::new(start)?;
    let mut explorer = Explorer::new(
        session,
        options,
        Cursor::new(script.as_bytes().to_vec()),
        Vec::new(),
    );
    explorer.run()?;
    let session = explorer.session().clone();
    let transcript = String::from_utf8(explorer.into_output())?;
    Ok((transcript, session))
}

fn no_pause() -> ExplorerOptions {
    ExplorerOptions {
        profile: MenuProfile::Full,
        pause: false,
    }
}

#[test]
fn exit_prints_farewell() -> Result<()> {
    let root = tempdir()?;
    let (out, _) = run_script(root.path(), no_pause(), "10\n")?;
    assert!(out.contains("Current Directory: \""));
    assert!(out.contains("10. Exit"));
    assert!(out.trim_end().ends_with("Bye!"));
    Ok(())
}

#[test]
fn end_of_input_ends_the_loop_quietly() -> Result<()> {
    let root = tempdir()?;
    let (out, _) = run_script(root.path(), no_pause(), "")?;
    assert!(out.contains("Enter choice: "));
    assert!(!out.contains("Bye!"));
    Ok(())
}

#[test]
fn invalid_choices_redisplay_the_menu() -> Result<()> {
    let root = tempdir()?;
    let (out, _) = run_script(root.path(), no_pause(), "42\nhello\n0\n10\n")?;
    assert_eq!(out.matches("Invalid choice.").count(), 3);
    assert_eq!(out.matches("Enter choice: ").count(), 4);
    Ok(())
}

#[test]
fn list_shows_kind_and_size() -> Result<()> {
    let root = tempdir()?;
    fs::write(root.path().join("notes.txt"), "12345")?;
    fs::create_dir(root.path().join("src"))?;

    let (out, _) = run_script(root.path(), no_pause(), "1\n10\n")?;
    assert!(out.contains("Listing: "));
    assert!(out.contains("FILE  notes.txt  (5)"));
    assert!(out.contains("DIR   src  (-)"));
    Ok(())
}

#[test]
fn list_pauses_until_enter_in_full_profile() -> Result<()> {
    let root = tempdir()?;
    let (out, _) = run_script(root.path(), ExplorerOptions::default(), "1\n\n10\n")?;
    assert!(out.contains("Press Enter to continue..."));
    assert!(out.trim_end().ends_with("Bye!"));
    Ok(())
}

#[test]
fn create_change_dir_and_go_back_up() -> Result<()> {
    let root = tempdir()?;
    let base = fs::canonicalize(root.path())?;
    fs::create_dir(base.join("my dir"))?;

    let script = "2\nmy dir\n3\nhello world.txt\n2\n..\n10\n";
    let (out, session) = run_script(&base, no_pause(), script)?;

    assert!(out.contains(&format!("Now in: {}", base.join("my dir").display())));
    assert!(out.contains("Created file: hello world.txt"));
    assert!(base.join("my dir").join("hello world.txt").is_file());
    assert_eq!(session.cwd(), base);
    Ok(())
}

#[test]
fn failed_change_dir_reports_and_keeps_cwd() -> Result<()> {
    let root = tempdir()?;
    let base = fs::canonicalize(root.path())?;

    let (out, session) = run_script(&base, no_pause(), "2\nnowhere\n10\n")?;
    assert!(out.contains("cd error: not found"));
    assert_eq!(session.cwd(), base);
    Ok(())
}

#[test]
fn create_existing_file_reports_and_keeps_content() -> Result<()> {
    let root = tempdir()?;
    fs::write(root.path().join("keep.txt"), "data")?;

    let (out, _) = run_script(root.path(), no_pause(), "3\nkeep.txt\n10\n")?;
    assert!(out.contains("Create error: already exists"));
    assert_eq!(fs::read_to_string(root.path().join("keep.txt"))?, "data");
    Ok(())
}

#[test]
fn delete_directory_reports_item_count() -> Result<()> {
    let root = tempdir()?;
    fs::create_dir_all(root.path().join("build").join("obj"))?;
    fs::write(root.path().join("build").join("obj").join("a.o"), "")?;

    let (out, _) = run_script(root.path(), no_pause(), "4\nbuild\n4\nbuild\n10\n")?;
    assert!(out.contains("Removed directory (and contents): build (3 items)"));
    assert!(out.contains("Delete error: not found"));
    assert!(!root.path().join("build").exists());
    Ok(())
}

#[test]
fn copy_and_move_through_the_menu() -> Result<()> {
    let root = tempdir()?;
    fs::create_dir_all(root.path().join("site").join("css"))?;
    fs::write(root.path().join("site").join("css").join("main.css"), "body{}")?;

    let script = "5\nsite\nsite-backup\n6\nsite-backup\narchive\n5\nmissing\nx\n10\n";
    let (out, _) = run_script(root.path(), no_pause(), script)?;

    assert!(out.contains("Copied to: site-backup"));
    assert!(out.contains("Moved/Renamed to: archive"));
    assert!(out.contains("Copy error: not found"));
    assert_eq!(
        fs::read_to_string(root.path().join("archive").join("css").join("main.css"))?,
        "body{}"
    );
    assert!(root.path().join("site").is_dir());
    assert!(!root.path().join("site-backup").exists());
    Ok(())
}

#[test]
fn search_is_case_insensitive_and_reports_no_matches() -> Result<()> {
    let root = tempdir()?;
    fs::write(root.path().join("alpha.TXT"), "")?;
    fs::create_dir(root.path().join("sub"))?;
    fs::write(root.path().join("sub").join("beta.txt"), "")?;
    fs::write(root.path().join("sub").join("gamma.md"), "")?;

    let (out, _) = run_script(root.path(), no_pause(), "7\ntxt\n7\nzzz\n10\n")?;
    assert!(out.contains("alpha.TXT"));
    assert!(out.contains("beta.txt"));
    assert!(!out.contains("gamma.md"));
    assert!(out.contains("No matches."));
    Ok(())
}

#[test]
fn permissions_can_be_changed_and_viewed() -> Result<()> {
    let root = tempdir()?;
    let script_path = root.path().join("run.sh");
    fs::write(&script_path, "#!/bin/sh")?;

    let script = "9\nrun.sh\n751\n8\nrun.sh\n9\nrun.sh\n8x9\n10\n";
    let (out, _) = run_script(root.path(), no_pause(), script)?;

    assert!(out.contains("Permissions set to 751 for run.sh"));
    assert!(out.contains("run.sh : rwxr-x--x"));
    assert!(out.contains("chmod error: invalid permission mode '8x9'"));
    assert_eq!(fs::metadata(&script_path)?.permissions().mode() & 0o777, 0o751);
    Ok(())
}

#[test]
fn basic_profile_uses_exact_search_and_seven_entries() -> Result<()> {
    let root = tempdir()?;
    fs::create_dir(root.path().join("nested"))?;
    fs::write(root.path().join("nested").join("target.log"), "")?;
    fs::write(root.path().join("target.log.bak"), "")?;

    let options = ExplorerOptions {
        profile: MenuProfile::Basic,
        pause: true,
    };
    let (out, _) = run_script(root.path(), options, "6\ntarget.log\n7\n")?;

    assert!(out.contains("TERMINAL FILE EXPLORER"));
    assert!(out.contains("7. Exit"));
    assert!(!out.contains("8. "));
    assert!(out.contains("Found at: "));
    assert_eq!(out.matches("Found at: ").count(), 1);
    assert!(!out.contains("Press Enter to continue..."));
    assert!(out.contains("Exiting File Explorer... Goodbye!"));
    Ok(())
}

#[test]
fn copying_a_file_onto_itself_keeps_its_content() -> Result<()> {
    let root = tempdir()?;
    fs::write(root.path().join("a.txt"), "precious")?;

    let script = "5\na.txt\na.txt\n5\na.txt\n./a.txt\n10\n";
    let (out, _) = run_script(root.path(), no_pause(), script)?;

    assert_eq!(out.matches("Copy error: invalid argument: cannot copy").count(), 2);
    assert!(!out.contains("Copied to:"));
    assert_eq!(fs::read_to_string(root.path().join("a.txt"))?, "precious");
    Ok(())
}
