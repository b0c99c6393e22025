//! Integration tests for the glob dialect, driven through `Matcher`.
//!
//! The cases follow the upstream EditorConfig core test suite (star.in,
//! question.in, brackets.in, braces.in, star_star.in, utf8char.in), with
//! every pattern anchored at `/`.

use glob::Matcher;

fn matcher(globs: &[&str]) -> Matcher {
    Matcher::anchored(globs.iter().copied(), "/").unwrap()
}

// ============================================================================
// star.in — `*`
// ============================================================================

#[test]
fn star_matches_within_one_component() {
    let ma = matcher(&["a*e.c"]);
    let mb = matcher(&["Bar/*"]);
    let mc = matcher(&["*"]);

    // single, zero, and multiple characters
    for path in ["/ace.c", "/ae.c", "/abcde.c"] {
        assert!(ma.contains(path).unwrap(), "{path}");
        assert!(!mb.contains(path).unwrap(), "{path}");
        assert!(mc.contains(path).unwrap(), "{path}");
    }

    // does not cross the path separator
    assert!(!ma.contains("/a/e.c").unwrap());
    assert!(mc.contains("/a/e.c").unwrap());

    // star after a slash, and dot files are not special
    for path in ["/Bar/foo.txt", "/Bar/.editorconfig"] {
        assert!(!ma.contains(path).unwrap());
        assert!(mb.contains(path).unwrap());
        assert!(mc.contains(path).unwrap());
    }
    assert!(mc.contains("/.editorconfig").unwrap());
    assert!(!mb.contains("/.editorconfig").unwrap());
}

// ============================================================================
// question.in — `?`
// ============================================================================

#[test]
fn question_matches_exactly_one_character() {
    let m = matcher(&["som?.c"]);

    assert!(m.contains("/some.c").unwrap());
    assert!(!m.contains("/som.c").unwrap());
    assert!(!m.contains("/something.c").unwrap());
    assert!(!m.contains("/som/.c").unwrap());
}

// ============================================================================
// brackets.in — `[` and `]`
// ============================================================================

#[test]
fn bracket_choices_and_ranges() {
    let choice = matcher(&["[ab].a"]);
    let neg_choice = matcher(&["[!ab].b"]);
    let range = matcher(&["[d-g].c"]);
    let neg_range = matcher(&["[!d-g].d"]);
    let range_and_choice = matcher(&["[abd-g].e"]);
    let choice_with_dash = matcher(&["[-ab].f"]);

    assert!(choice.contains("/a.a").unwrap());
    assert!(!choice.contains("/c.a").unwrap());

    assert!(neg_choice.contains("/c.b").unwrap());
    assert!(!neg_choice.contains("/a.b").unwrap());

    assert!(range.contains("/f.c").unwrap());
    assert!(!range.contains("/h.c").unwrap());

    assert!(neg_range.contains("/h.d").unwrap());
    assert!(!neg_range.contains("/f.d").unwrap());

    assert!(range_and_choice.contains("/e.e").unwrap());
    assert!(choice_with_dash.contains("/-.f").unwrap());
}

#[test]
fn bracket_close_bracket_handling() {
    let close_inside = matcher(&[r"[\]ab].g"]);
    let close_outside = matcher(&["[ab]].g"]);
    let neg_close_inside = matcher(&[r"[!\]ab].g"]);
    let neg_close_outside = matcher(&["[!ab]].g"]);

    assert!(close_inside.contains("/].g").unwrap());
    assert!(!close_inside.contains("/c.g").unwrap());

    assert!(close_outside.contains("/b].g").unwrap());

    assert!(neg_close_inside.contains("/c.g").unwrap());
    assert!(!neg_close_inside.contains("/].g").unwrap());

    assert!(neg_close_outside.contains("/c].g").unwrap());
    assert!(!neg_close_outside.contains("/a].g").unwrap());
}

/// A bracket group containing an unescaped `/` has no class meaning.
#[test]
fn bracket_containing_slash_is_literal() {
    let slash_inside = matcher(&["ab[e/]cd.i"]);
    let slash_half_open = matcher(&["ab[/c"]);

    assert!(slash_inside.contains("/ab[e/]cd.i").unwrap());
    assert!(!slash_inside.contains("/ab/cd.i").unwrap());
    assert!(!slash_inside.contains("/abecd.i").unwrap());

    assert!(slash_half_open.contains("/ab[/c").unwrap());
    assert!(!slash_half_open.contains("/abc").unwrap());
}

// ============================================================================
// braces.in — `{` and `}`
// ============================================================================

#[test]
fn brace_word_choice() {
    let m = matcher(&["*.{py,js,html}"]);

    assert!(m.contains("/test.py").unwrap());
    assert!(m.contains("/test.js").unwrap());
    assert!(m.contains("/test.html").unwrap());
    assert!(!m.contains("/test.pyc").unwrap());
}

#[test]
fn brace_single_and_empty_groups_are_literal() {
    let single = matcher(&["{single}.b"]);
    assert!(single.contains("/{single}.b").unwrap());
    assert!(!single.contains("/single.b").unwrap());
    assert!(!single.contains("/.b").unwrap());

    let empty = matcher(&["{}.c"]);
    assert!(empty.contains("/{}.c").unwrap());
    assert!(!empty.contains("/.c").unwrap());
}

#[test]
fn brace_empty_words() {
    let one_empty = matcher(&["a{b,c,}.d"]);
    assert!(one_empty.contains("/a.d").unwrap());
    assert!(one_empty.contains("/ab.d").unwrap());
    assert!(one_empty.contains("/ac.d").unwrap());
    assert!(!one_empty.contains("/a,.d").unwrap());

    let many_empty = matcher(&["a{,b,,c,}.e"]);
    assert!(many_empty.contains("/a.e").unwrap());
    assert!(many_empty.contains("/ab.e").unwrap());
    assert!(many_empty.contains("/ac.e").unwrap());
    assert!(!many_empty.contains("/a,.e").unwrap());
}

#[test]
fn brace_unbalanced_groups_are_literal() {
    let no_closing = matcher(&["{.f"]);
    assert!(no_closing.contains("/{.f").unwrap());
    assert!(!no_closing.contains("/.f").unwrap());

    let closing_inside = matcher(&["{},b}.h"]);
    assert!(closing_inside.contains("/{},b}.h").unwrap());

    let unmatched = matcher(&["{{,b,c{d}.i"]);
    assert!(unmatched.contains("/{{,b,c{d}.i").unwrap());
    assert!(!unmatched.contains("/{.i").unwrap());
    assert!(!unmatched.contains("/b.i").unwrap());
    assert!(!unmatched.contains("/c{d.i").unwrap());
}

#[test]
fn brace_nesting() {
    let m = matcher(&["{word,{also},this}.g"]);

    assert!(m.contains("/word.g").unwrap());
    assert!(m.contains("/{also}.g").unwrap());
    assert!(m.contains("/this.g").unwrap());
    assert!(!m.contains("/word,this}.g").unwrap());
    assert!(!m.contains("/{also,this}.g").unwrap());
}

#[test]
fn brace_escapes() {
    let comma = matcher(&[r"{a\,b,cd}.txt"]);
    assert!(comma.contains("/a,b.txt").unwrap());
    assert!(comma.contains("/cd.txt").unwrap());
    assert!(!comma.contains("/a.txt").unwrap());

    let closing = matcher(&[r"{e,\},f}.txt"]);
    assert!(closing.contains("/e.txt").unwrap());
    assert!(closing.contains("/}.txt").unwrap());
    assert!(closing.contains("/f.txt").unwrap());

    let backslash = matcher(&[r"{g,\\,i}.txt"]);
    assert!(backslash.contains("/g.txt").unwrap());
    assert!(backslash.contains(r"/\.txt").unwrap());
    assert!(backslash.contains("/i.txt").unwrap());
}

#[test]
fn brace_nested_patterns() {
    let m = matcher(&["{some,a{*c,b}[ef]}.j"]);

    for yes in ["/some.j", "/abe.j", "/abf.j", "/ace.j", "/acf.j", "/abce.j", "/abcf.j"] {
        assert!(m.contains(yes).unwrap(), "{yes}");
    }
    for no in ["/abg.j", "/acg.j", "/abcg.j", "/ae.j", "/.j"] {
        assert!(!m.contains(no).unwrap(), "{no}");
    }
}

#[test]
fn brace_numeric_range() {
    let m = matcher(&["{3..120}"]);

    assert!(m.contains("/3").unwrap());
    assert!(m.contains("/15").unwrap());
    assert!(m.contains("/60").unwrap());
    assert!(m.contains("/120").unwrap());
    assert!(!m.contains("/1").unwrap());
    assert!(!m.contains("/121").unwrap());
    assert!(!m.contains("/5a").unwrap());
    // Zero-prefixed numbers never satisfy a range.
    assert!(!m.contains("/060").unwrap());
}

#[test]
fn brace_word_range_is_literal() {
    let m = matcher(&["{aardvark..antelope}"]);

    assert!(m.contains("/{aardvark..antelope}").unwrap());
    assert!(!m.contains("/aardvark").unwrap());
    assert!(!m.contains("/agreement").unwrap());
    assert!(!m.contains("/antelope").unwrap());
}

// ============================================================================
// star_star.in — `**`
// ============================================================================

#[test]
fn globstar_crosses_separators() {
    let kv1 = matcher(&["a**z.c"]);
    let kv2 = matcher(&["b/**z.c"]);
    let kv3 = matcher(&["c**/z.c"]);
    let kv4 = matcher(&["d/**/z.c"]);

    for yes in ["/a/z.c", "/amnz.c", "/am/nz.c", "/a/mnz.c", "/amn/z.c", "/a/mn/z.c"] {
        assert!(kv1.contains(yes).unwrap(), "{yes}");
    }

    for yes in ["/b/z.c", "/b/mnz.c", "/b/mn/z.c"] {
        assert!(kv2.contains(yes).unwrap(), "{yes}");
    }
    for no in ["/bmnz.c", "/bm/nz.c", "/bmn/z.c"] {
        assert!(!kv2.contains(no).unwrap(), "{no}");
    }

    for yes in ["/c/z.c", "/cmn/z.c", "/c/mn/z.c"] {
        assert!(kv3.contains(yes).unwrap(), "{yes}");
    }
    for no in ["/cmnz.c", "/cm/nz.c", "/c/mnz.c"] {
        assert!(!kv3.contains(no).unwrap(), "{no}");
    }

    for yes in ["/d/z.c", "/d/mn/z.c"] {
        assert!(kv4.contains(yes).unwrap(), "{yes}");
    }
    for no in ["/dmnz.c", "/dm/nz.c", "/d/mnz.c", "/dmn/z.c"] {
        assert!(!kv4.contains(no).unwrap(), "{no}");
    }
}

/// `**` anchored at the root matches every absolute path.
#[test]
fn globstar_at_root_matches_everything() {
    let m = matcher(&["**"]);

    for path in ["/", "/a", "/a/b/c", "/.hidden", "/深い/パス"] {
        assert!(m.contains(path).unwrap(), "{path}");
    }
}

// ============================================================================
// utf8char.in
// ============================================================================

#[test]
fn utf8_pattern_matches_utf8_path() {
    let m = matcher(&["中文.txt"]);

    assert!(m.contains("/中文.txt").unwrap());
    assert!(!m.contains("/中文.bak").unwrap());
}
