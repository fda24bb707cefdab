use teeny_compiler::prelude::*;

const HELLO: &str = include_str!("hello.teeny");
const FIB: &str = include_str!("fib.teeny");
const AVERAGE: &str = include_str!("average.teeny");
const GOTO: &str = include_str!("goto.teeny");

/// Lines between the entry function's opening line and the first statement.
fn declarations(c_source: &str) -> Vec<&str> {
    c_source
        .lines()
        .skip(2)
        .take_while(|line| line.starts_with("float "))
        .collect()
}

#[test]
fn test_compile_hello() {
    let c_source = compile_str(HELLO).unwrap();

    assert_eq!(
        c_source,
        "#include <stdio.h>\nint main(void){\nprintf(\"Hello World!\\n\");\nreturn 0;\n}\n"
    );
    assert!(declarations(&c_source).is_empty());
}

#[test]
fn test_compile_fib() {
    let c_source = compile_str(FIB).unwrap();

    let expected = r#"#include <stdio.h>
int main(void){
float nums;
float a;
float b;
float c;
printf("How many fibonacci numbers do you want?\n");
if(0 == scanf("%f", &nums)) {
nums = 0;
scanf("%*s");
}
printf("\n");
a = 0;
b = 1;
while(nums>0){
printf("%.2f\n", (float)(a));
c = a+b;
a = b;
b = c;
nums = nums-1;
}
return 0;
}
"#;
    assert_eq!(c_source, expected);
}

#[test]
fn test_compile_goto() {
    let c_source = compile_str(GOTO).unwrap();

    let expected = r#"#include <stdio.h>
int main(void){
float n;
goto skip;
printf("never\n");
skip:
n = 3;
again:
if(n>=1){
printf("%.2f\n", (float)(n*-2));
n = n-1;
goto again;
}
return 0;
}
"#;
    assert_eq!(c_source, expected);
}

#[test]
fn test_compile_average() {
    let c_source = compile_str(AVERAGE).unwrap();

    assert_eq!(
        declarations(&c_source),
        vec!["float a;", "float b;", "float s;", "float c;"]
    );
    assert!(c_source.contains("while(a<1){\n"));
    assert!(c_source.contains("while(b<a){\n"));
    assert!(c_source.contains("s = s+c;\n"));
    assert!(c_source.contains("printf(\"%.2f\\n\", (float)(s/a));\n"));
    assert!(c_source.ends_with("return 0;\n}\n"));
}

#[test]
fn test_declared_once() {
    for source in [HELLO, FIB, AVERAGE, GOTO] {
        let c_source = compile_str(source).unwrap();
        let decls = declarations(&c_source);

        let mut unique = decls.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), decls.len(), "duplicate declaration in:\n{c_source}");

        // No declarations past the header.
        let total = c_source.lines().filter(|line| line.starts_with("float ")).count();
        assert_eq!(total, decls.len());
    }
}

#[test]
fn test_idempotent() {
    for source in [HELLO, FIB, AVERAGE, GOTO] {
        assert_eq!(compile_str(source).unwrap(), compile_str(source).unwrap());
    }
}

#[test]
fn test_replay_matches_single_pass() {
    for source in [HELLO, FIB, AVERAGE, GOTO] {
        let events = parse_events(source).unwrap();

        let mut code_gen = CodeGen::new(Emitter::new("replay.c"));
        replay(events, &mut code_gen);

        assert_eq!(code_gen.into_emitter().source(), compile_str(source).unwrap());
    }
}

#[test]
fn test_compile_with_output() {
    let conf = CompileConf {
        output: "custom.c".into(),
    };
    let emitter = compile_with(HELLO, conf).unwrap();

    assert_eq!(emitter.output(), std::path::Path::new("custom.c"));
    assert_eq!(emitter.lines(Section::Header), &["#include <stdio.h>", "int main(void){"]);
}

#[test]
fn test_default_output() {
    assert_eq!(
        CompileConf::default().output,
        std::path::PathBuf::from(teeny_compiler::constants::DEFAULT_OUTPUT)
    );
}
