//! C code generation.
use crate::{
    constants::NUMBER_TYPE,
    emit::Emitter,
    parsing::{Event, EventSink},
};

/// Code generator.
///
/// Translates parse events into C source, as they arrive.
pub struct CodeGen {
    emitter: Emitter,
}

impl CodeGen {
    #[inline]
    pub fn new(emitter: Emitter) -> Self {
        Self { emitter }
    }

    pub fn emitter(&self) -> &Emitter {
        &self.emitter
    }

    pub fn into_emitter(self) -> Emitter {
        self.emitter
    }
}

impl EventSink for CodeGen {
    fn event(&mut self, event: Event) {
        let out = &mut self.emitter;

        match event {
            Event::ProgramStart => {
                out.header_line("#include <stdio.h>");
                out.header_line("int main(void){");
            }
            Event::ProgramEnd => {
                out.emit_line("return 0;");
                out.emit_line("}");
            }
            Event::Declare(name) => {
                out.header_line(&format!("{NUMBER_TYPE} {name};"));
            }
            Event::PrintText(text) => {
                out.emit_line(&format!("printf(\"{text}\\n\");"));
            }
            Event::PrintExprStart => out.emit("printf(\"%.2f\\n\", (float)("),
            Event::PrintExprEnd => out.emit_line("));"),
            Event::IfStart => out.emit("if("),
            Event::WhileStart => out.emit("while("),
            Event::BodyStart => out.emit_line("){"),
            Event::BodyEnd => out.emit_line("}"),
            Event::Label(name) => out.emit_line(&format!("{name}:")),
            Event::Goto(name) => out.emit_line(&format!("goto {name};")),
            Event::AssignStart(name) => out.emit(&format!("{name} = ")),
            Event::AssignEnd => out.emit_line(";"),
            Event::Input(name) => {
                // On a failed conversion, zero the variable and
                // discard the offending word so the next read
                // doesn't trip over it.
                out.emit_line(&format!("if(0 == scanf(\"%f\", &{name})) {{"));
                out.emit_line(&format!("{name} = 0;"));
                out.emit_line("scanf(\"%*s\");");
                out.emit_line("}");
            }
            Event::Operator(text) | Event::Number(text) | Event::Variable(text) => out.emit(&text),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::parsing::replay;
    use smol_str::SmolStr;

    fn generate(events: Vec<Event>) -> String {
        let mut code_gen = CodeGen::new(Emitter::new("test.c"));
        replay(events, &mut code_gen);
        code_gen.into_emitter().source()
    }

    #[test]
    fn test_print_text() {
        let source = generate(vec![
            Event::ProgramStart,
            Event::PrintText(SmolStr::from("hi there")),
            Event::ProgramEnd,
        ]);

        assert_eq!(
            source,
            "#include <stdio.h>\nint main(void){\nprintf(\"hi there\\n\");\nreturn 0;\n}\n"
        );
    }

    #[test]
    fn test_declarations_hoisted() {
        let source = generate(vec![
            Event::ProgramStart,
            Event::Declare(SmolStr::from("a")),
            Event::AssignStart(SmolStr::from("a")),
            Event::Number(SmolStr::from("1")),
            Event::AssignEnd,
            Event::Declare(SmolStr::from("b")),
            Event::Input(SmolStr::from("b")),
            Event::ProgramEnd,
        ]);

        let expected = "\
#include <stdio.h>
int main(void){
float a;
float b;
a = 1;
if(0 == scanf(\"%f\", &b)) {
b = 0;
scanf(\"%*s\");
}
return 0;
}
";
        assert_eq!(source, expected);
    }

    #[test]
    fn test_while_block() {
        let source = generate(vec![
            Event::WhileStart,
            Event::Variable(SmolStr::from("n")),
            Event::Operator(SmolStr::from("<")),
            Event::Number(SmolStr::from("10")),
            Event::BodyStart,
            Event::Goto(SmolStr::from("end")),
            Event::BodyEnd,
            Event::Label(SmolStr::from("end")),
        ]);

        assert_eq!(source, "while(n<10){\ngoto end;\n}\nend:\n");
    }
}
