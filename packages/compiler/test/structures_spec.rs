/**
 * Structure Builder Tests
 *
 * extract -> render against fixed text, one group per member category.
 */

#[cfg(test)]
mod tests {
    use d2o_compiler::ast_util::decorator_call;
    use d2o_compiler::source_file::{Node, SourceFile};
    use d2o_compiler::structures::*;
    use d2o_compiler::writer::CodeWriter;
    use oxc_allocator::Allocator;
    use oxc_ast::ast::MethodDefinitionKind;

    /// Runs `f` over every classifier node of `code`.
    fn each_node<T>(code: &str, mut f: impl FnMut(Node<'_, '_>, &str) -> Option<T>) -> Vec<T> {
        let allocator = Allocator::default();
        let source = SourceFile::parse(&allocator, code).expect("test source parses");
        source.nodes().into_iter().filter_map(|node| f(node, code)).collect()
    }

    fn rendered(render: impl FnOnce(&mut CodeWriter)) -> String {
        let mut writer = CodeWriter::new(4);
        render(&mut writer);
        writer.to_source()
    }

    mod component_tests {
        use super::*;

        const CODE: &str = "
@Component
export class SimpleComponent extends Vue {}

@Component({
  components: {
    NestedComponent,
    AnotherNestedComponent,
    Aliased: OtherComponent,
  },
})
export class ComplexComponent extends Vue {}
";

        fn components() -> Vec<(Component, String)> {
            each_node(CODE, |node, src| match node {
                Node::Class(class) => {
                    let call = decorator_call(&class.decorators[0], src);
                    let structure = component::extract(class, &call, src);
                    let code = rendered(|w| component::render(&structure, w));
                    Some((structure, code))
                }
                _ => None,
            })
        }

        #[test]
        fn should_create_simple_component() {
            let (structure, code) = &components()[0];
            assert_eq!(structure.name, "SimpleComponent");
            assert!(structure.imported_components.is_empty());
            assert_eq!(code, "name: 'SimpleComponent',\n");
        }

        #[test]
        fn should_keep_component_map_entries_in_order() {
            let (structure, code) = &components()[1];
            assert_eq!(
                structure.imported_components,
                vec!["NestedComponent", "AnotherNestedComponent", "Aliased: OtherComponent"]
            );
            assert_eq!(
                code,
                "name: 'ComplexComponent',\n\ncomponents: {\n    NestedComponent,\n    AnotherNestedComponent,\n    Aliased: OtherComponent,\n},\n"
            );
        }
    }

    mod prop_tests {
        use super::*;

        const CODE: &str = "export default class ExampleComponent extends mixins(MyMixin) {
  @Prop({ type: Boolean, default: true })
  public defaultBoolean!: boolean

  @Prop({ type: String, default: 'option 1' })
  public readonly defaultProp!: 'option 1' | 'option 2'

  @Prop({ type: String, required: true })
  public readonly requiredStringProp!: string

  @Prop({ type: String, required: false })
  public readonly notRequiredStringProp?: string

  @Prop({ type: Object })
  public readonly objectProp?: MyInterface

  @Prop({ type: String, validator: (prop) => typeof prop === 'string' || prop === null, required: false, default: 'cenas' })
  public validatedProp: string

  @Prop({ type: String, required: false, default: null })
  public stringOrNullProp!: string | null

  @Prop()
  untypedProp

  @Prop([String, Number])
  shorthandProp!: string | number

  @Prop({ type: String, required: isRequired })
  computedRequiredProp!: string
}
";

        fn props() -> Vec<(Prop, String)> {
            each_node(CODE, |node, src| match node {
                Node::Field(field) => {
                    let call = decorator_call(&field.decorators[0], src);
                    let structure = prop::extract(field, &call, src);
                    let code = rendered(|w| prop::render(&structure, w));
                    Some((structure, code))
                }
                _ => None,
            })
        }

        #[test]
        fn should_generate_not_required_boolean_prop_with_default_value() {
            let (structure, code) = &props()[0];
            assert_eq!(
                *structure,
                Prop {
                    name: "defaultBoolean".into(),
                    is_readonly: false,
                    is_required: false,
                    prop_type: Some("Boolean".into()),
                    native_type: "boolean".into(),
                    default_value: Some("true".into()),
                    validator: None,
                }
            );
            assert_eq!(
                code,
                "defaultBoolean: {\n    type: Boolean as PropType<boolean>,\n    default: true,\n},\n"
            );
        }

        #[test]
        fn should_generate_string_union_prop_with_default_value() {
            let (structure, code) = &props()[1];
            assert!(structure.is_readonly);
            assert_eq!(
                code,
                "defaultProp: {\n    type: String as PropType<'option 1' | 'option 2'>,\n    default: 'option 1',\n},\n"
            );
        }

        #[test]
        fn should_generate_required_string_prop() {
            let (structure, code) = &props()[2];
            assert!(structure.is_required);
            assert_eq!(
                code,
                "requiredStringProp: {\n    type: String as PropType<string>,\n    required: true,\n},\n"
            );
        }

        #[test]
        fn should_omit_required_line_when_false() {
            let (structure, code) = &props()[3];
            assert!(!structure.is_required);
            assert_eq!(code, "notRequiredStringProp: {\n    type: String as PropType<string>,\n},\n");
        }

        #[test]
        fn should_use_interface_as_prop_type() {
            let (_, code) = &props()[4];
            assert_eq!(code, "objectProp: {\n    type: Object as PropType<MyInterface>,\n},\n");
        }

        #[test]
        fn should_render_default_before_validator() {
            let (structure, code) = &props()[5];
            assert_eq!(
                structure.validator.as_deref(),
                Some("(prop) => typeof prop === 'string' || prop === null")
            );
            assert_eq!(
                code,
                "validatedProp: {\n    type: String as PropType<string>,\n    default: 'cenas',\n    validator: (prop) => typeof prop === 'string' || prop === null,\n},\n"
            );
        }

        #[test]
        fn should_generate_prop_with_null_default() {
            let (_, code) = &props()[6];
            assert_eq!(
                code,
                "stringOrNullProp: {\n    type: String as PropType<string | null>,\n    default: null,\n},\n"
            );
        }

        #[test]
        fn should_generate_untyped_prop() {
            let (structure, code) = &props()[7];
            assert_eq!(structure.native_type, "any");
            assert_eq!(structure.prop_type, None);
            assert_eq!(code, "untypedProp: {\n},\n");
        }

        #[test]
        fn should_read_type_shorthand() {
            let (_, code) = &props()[8];
            assert_eq!(
                code,
                "shorthandProp: {\n    type: [String, Number] as PropType<string | number>,\n},\n"
            );
        }

        #[test]
        fn should_only_require_on_literal_true() {
            let (structure, _) = &props()[9];
            assert!(!structure.is_required);
        }
    }

    mod data_tests {
        use super::*;

        const CODE: &str = "@Component
export default class ExampleComponent extends Vue {

  nullClassInstance: Moment | null = null

  initializedString: string = 'my string'

  uninitializedNumber: number

  private privateProperty: any

  public publicProperty: boolean = true

  private readonly readonlyProperty: string = 'my readonly property'
}
";

        fn data() -> Vec<(DataField, String)> {
            each_node(CODE, |node, src| match node {
                Node::Field(field) => {
                    let structure = data::extract(field, src);
                    let code = rendered(|w| data::render(&structure, w));
                    Some((structure, code))
                }
                _ => None,
            })
        }

        #[test]
        fn should_render_initializers_verbatim() {
            let codes: Vec<String> = data().into_iter().map(|(_, code)| code).collect();
            assert_eq!(
                codes,
                vec![
                    "nullClassInstance: null,\n",
                    "initializedString: 'my string',\n",
                    "uninitializedNumber: undefined,\n",
                    "privateProperty: undefined,\n",
                    "publicProperty: true,\n",
                    "readonlyProperty: 'my readonly property',\n",
                ]
            );
        }

        #[test]
        fn should_track_types_and_readonly() {
            let fields = data();
            assert_eq!(fields[0].0.type_.as_deref(), Some("Moment | null"));
            assert_eq!(fields[2].0.value, None);
            assert!(fields[5].0.is_readonly);
            assert!(!fields[4].0.is_readonly);
        }
    }

    mod ref_tests {
        use super::*;

        const CODE: &str = "export default class ExampleComponent extends mixins(MyMixin) {
  @Ref('myDiv')
  readonly myDiv!: HTMLDivElement

  @Ref('myOtherDiv')
  myOtherDiv
}
";

        fn refs() -> Vec<(Ref, String)> {
            each_node(CODE, |node, src| match node {
                Node::Field(field) => {
                    let structure = refs::extract(field, src);
                    let code = rendered(|w| refs::render(&structure, w));
                    Some((structure, code))
                }
                _ => None,
            })
        }

        #[test]
        fn should_create_ref_from_explicit_declaration() {
            let (structure, code) = &refs()[0];
            assert!(structure.is_readonly);
            assert_eq!(
                code,
                "myDiv (): HTMLDivElement {\n    return this.$refs.myDiv as HTMLDivElement\n},\n"
            );
        }

        #[test]
        fn should_create_ref_from_implicit_declaration() {
            let (structure, code) = &refs()[1];
            assert_eq!(structure.type_, None);
            assert_eq!(code, "myOtherDiv () {\n    return this.$refs.myOtherDiv\n},\n");
        }
    }

    mod computed_tests {
        use super::*;

        const CODE: &str = "export default class ExampleComponent extends mixins(MyMixin) {
  get myDataOneUppercase () {
    return this.myDataOne.toUpperCase()
  }

  get literalReturnValue (): boolean {
    return !false
  }
}
";

        fn getters() -> Vec<(Computed, String)> {
            each_node(CODE, |node, src| match node {
                Node::Method(getter) if getter.kind == MethodDefinitionKind::Get => {
                    let structure = computed::extract(getter, src);
                    let code = rendered(|w| computed::render(&structure, w));
                    Some((structure, code))
                }
                _ => None,
            })
        }

        #[test]
        fn should_create_computed_from_implicit_getter() {
            let (structure, code) = &getters()[0];
            assert_eq!(structure.statements, vec!["return this.myDataOne.toUpperCase()"]);
            assert_eq!(
                code,
                "myDataOneUppercase() {\n    return this.myDataOne.toUpperCase()\n},\n"
            );
        }

        #[test]
        fn should_create_computed_from_explicit_getter() {
            let (_, code) = &getters()[1];
            assert_eq!(code, "literalReturnValue(): boolean {\n    return !false\n},\n");
        }
    }

    mod method_tests {
        use super::*;

        const CODE: &str = "export default class ExampleComponent extends mixins(MyMixin) {
  logSomething (something) {
    console.log(something)
  }

  doMath(a: number, b: number): number {
    return a + b
  }

  doSomethingWithRef() {
    this.myDiv.addEventListener('click', () => this.logSomething(this.doMath(1,1)))
  }

  async doSomethingAsync(): CenasType | undefined {
    try {
        const cenas = await fetchCenas()
        return cenas
    } catch (_error) {
        console.error(_error)
    }
    const t = (blah: number) => {
        const hehe = 'hjehe'
    }

    function a(blah: number) {
        return 'blah' + blah
    }

    const cenas =
        await fetchOutraCena()
    return cenas
  }

  withOptional(first?: string, ...rest: number[]) {
  }
}
";

        fn methods() -> Vec<(Method, String)> {
            each_node(CODE, |node, src| match node {
                Node::Method(m) => {
                    let structure = method::extract(m, src);
                    let code = rendered(|w| method::render(&structure, w));
                    Some((structure, code))
                }
                _ => None,
            })
        }

        #[test]
        fn should_create_method_from_implicit_declaration() {
            let (structure, code) = &methods()[0];
            assert_eq!(structure.parameters, vec![Parameter::new("something", None)]);
            assert_eq!(structure.return_type, None);
            assert_eq!(code, "logSomething (something) {\n    console.log(something)\n},\n");
        }

        #[test]
        fn should_create_method_from_explicit_declaration() {
            let (structure, code) = &methods()[1];
            assert_eq!(structure.return_type.as_deref(), Some("number"));
            assert_eq!(
                code,
                "doMath (a: number, b: number): number {\n    return a + b\n},\n"
            );
        }

        #[test]
        fn should_keep_arrow_function_arguments_verbatim() {
            let (_, code) = &methods()[2];
            assert_eq!(
                code,
                "doSomethingWithRef () {\n    this.myDiv.addEventListener('click', () => this.logSomething(this.doMath(1,1)))\n},\n"
            );
        }

        #[test]
        fn should_create_complex_async_method() {
            let (structure, code) = &methods()[3];
            assert!(structure.is_async);
            assert_eq!(structure.statements.as_ref().map(Vec::len), Some(5));
            assert_eq!(
                code,
                "async doSomethingAsync (): CenasType | undefined {
    try {
        const cenas = await fetchCenas()
        return cenas
    } catch (_error) {
        console.error(_error)
    }
    const t = (blah: number) => {
        const hehe = 'hjehe'
    }
    function a(blah: number) {
        return 'blah' + blah
    }
    const cenas =
        await fetchOutraCena()
    return cenas
},
"
            );
        }

        #[test]
        fn should_mark_optional_and_rest_parameters() {
            let (structure, code) = &methods()[4];
            assert_eq!(
                structure.parameters,
                vec![
                    Parameter::new("first?", Some("string")),
                    Parameter::new("...rest", Some("number[]")),
                ]
            );
            assert_eq!(code, "withOptional (first?: string, ...rest: number[]) {\n},\n");
        }
    }

    mod hook_tests {
        use super::*;

        const CODE: &str = "export default class ExampleComponent extends mixins(MyMixin) {
    created (): void {
        console.warn('created')
    }

    mounted () {
        this.refChild.method1(this.data4)
    }
}
";

        fn hooks() -> Vec<(Hook, String)> {
            each_node(CODE, |node, src| match node {
                Node::Method(m) => {
                    let structure = hook::extract(m, src);
                    let code = rendered(|w| hook::render(&structure, w));
                    Some((structure, code))
                }
                _ => None,
            })
        }

        #[test]
        fn should_generate_created_hook() {
            let (_, code) = &hooks()[0];
            assert_eq!(code, "created (): void {\n    console.warn('created')\n},\n");
        }

        #[test]
        fn should_default_return_type_to_void() {
            let (structure, code) = &hooks()[1];
            assert_eq!(structure.return_type, "void");
            assert_eq!(code, "mounted (): void {\n    this.refChild.method1(this.data4)\n},\n");
        }
    }

    mod emit_tests {
        use super::*;

        const CODE: &str = "@Component
export default class ExampleComponent extends Vue {
  @Emit('my-event')
  emitMyEvent (): void {}

  @Emit('my-event-with-payload-param')
  emitMyEventWithPayloadParam (num: number): void {
      this.myDataOne = 'outra cena'
  }

  @Emit('my-event-with-payload-return')
  emitMyEventWithPayloadReturn (num: number): string {
    this.myPrivateData = 'more more stuff'
    return this.myPrivateData
  }

  @Emit()
  addToCount (n: number) {
    this.count += n
  }

  @Emit(CHANGED)
  notifyChanged (n: number) {}
}
";

        fn emits() -> Vec<(Emit, String, String)> {
            each_node(CODE, |node, src| match node {
                Node::Method(m) => {
                    let call = decorator_call(&m.decorators[0], src);
                    let structure = emit::extract(m, &call, src);
                    let invocation = rendered(|w| emit::render(&structure, w));
                    let validator = rendered(|w| emit::render_validator(&structure, w));
                    Some((structure, invocation, validator))
                }
                _ => None,
            })
        }

        #[test]
        fn should_generate_basic_emit_event_with_no_params_or_return() {
            let (structure, invocation, validator) = &emits()[0];
            assert_eq!(structure.event, EmitEvent::Name("my-event".to_string()));
            assert_eq!(structure.statements, vec!["this.$emit('my-event')"]);
            assert_eq!(invocation, "emitMyEvent (): void {\n    this.$emit('my-event')\n},\n");
            assert_eq!(
                validator,
                "'my-event' (): boolean {\n    // TODO add validator\n    return true\n},\n"
            );
        }

        #[test]
        fn should_generate_emit_event_with_params_and_no_return() {
            let (_, invocation, _) = &emits()[1];
            assert_eq!(
                invocation,
                "emitMyEventWithPayloadParam (num: number): void {\n    this.myDataOne = 'outra cena'\n    this.$emit('my-event-with-payload-param', num)\n},\n"
            );
        }

        #[test]
        fn should_lift_trailing_return_into_the_payload() {
            let (structure, invocation, validator) = &emits()[2];
            assert_eq!(structure.return_type, "string");
            assert_eq!(
                structure.statements,
                vec![
                    "this.myPrivateData = 'more more stuff'",
                    "this.$emit('my-event-with-payload-return', this.myPrivateData, num)",
                ]
            );
            assert_eq!(
                invocation,
                "emitMyEventWithPayloadReturn (num: number): void {\n    this.myPrivateData = 'more more stuff'\n    this.$emit('my-event-with-payload-return', this.myPrivateData, num)\n},\n"
            );
            assert_eq!(
                validator,
                "'my-event-with-payload-return' (num: number): boolean {\n    // TODO add validator\n    return true\n},\n"
            );
        }

        #[test]
        fn should_hyphenate_method_name_without_event_argument() {
            let (structure, _, _) = &emits()[3];
            assert_eq!(structure.event, EmitEvent::Name("add-to-count".to_string()));
            assert_eq!(
                structure.statements.last().map(String::as_str),
                Some("this.$emit('add-to-count', n)")
            );
        }

        #[test]
        fn should_keep_non_literal_event_argument_as_expression() {
            let (structure, invocation, validator) = &emits()[4];
            assert_eq!(structure.event, EmitEvent::Expression("CHANGED".to_string()));
            assert_eq!(invocation, "notifyChanged (n: number): void {\n    this.$emit(CHANGED, n)\n},\n");
            assert_eq!(
                validator,
                "[CHANGED] (n: number): boolean {\n    // TODO add validator\n    return true\n},\n"
            );
        }
    }

    mod watch_tests {
        use super::*;
        use d2o_compiler::CompileError;

        const CODE: &str = "@Component
export default class ExampleComponent extends Vue {
  @Watch('data1')
  onData1Change (): void {
    this.data3++
  }

  @Watch('data2', { immediate: true, deep: true })
  onData2Change (newVal: string, oldVal: string): void {
    this.data3++
  }

  @Watch('data3', { immediate: 'yes' })
  onData3Change () {}

  @Watch('data4', { sync: true })
  onData4Change () {}
}
";

        fn watchers() -> Vec<(Result<Watch, CompileError>, Option<String>)> {
            each_node(CODE, |node, src| match node {
                Node::Method(m) => {
                    let call = decorator_call(&m.decorators[0], src);
                    let structure = watch::extract(m, &call, src);
                    let code = structure
                        .as_ref()
                        .ok()
                        .map(|watch| rendered(|w| watch::render(watch, w)));
                    Some((structure, code))
                }
                _ => None,
            })
        }

        #[test]
        fn should_create_watch_without_options() {
            let watchers = watchers();
            let (structure, code) = &watchers[0];
            let structure = structure.as_ref().expect("valid watcher");
            assert_eq!(structure.name, "data1");
            assert_eq!(structure.handler.statements, Some(vec!["this.data3++".to_string()]));
            assert_eq!(code.as_deref(), Some("'data1': {\n    handler: 'onData1Change',\n},\n"));
        }

        #[test]
        fn should_create_watch_with_options() {
            let watchers = watchers();
            let (structure, code) = &watchers[1];
            let structure = structure.as_ref().expect("valid watcher");
            assert_eq!(structure.immediate, Some(true));
            assert_eq!(structure.deep, Some(true));
            assert_eq!(structure.handler.parameters.len(), 2);
            assert_eq!(
                code.as_deref(),
                Some("'data2': {\n    handler: 'onData2Change',\n    immediate: true,\n    deep: true,\n},\n")
            );
        }

        #[test]
        fn should_reject_non_boolean_options() {
            let watchers = watchers();
            assert!(matches!(
                &watchers[2].0,
                Err(CompileError::InvalidWatchOptions { handler, .. }) if handler == "onData3Change"
            ));
        }

        #[test]
        fn should_reject_unknown_options() {
            let watchers = watchers();
            assert!(matches!(&watchers[3].0, Err(CompileError::InvalidWatchOptions { .. })));
        }
    }

    mod mixin_tests {
        use super::*;

        #[test]
        fn should_render_mixin_name() {
            let code = rendered(|w| mixin::render(&Mixin { name: "MyMixin".into() }, w));
            assert_eq!(code, "MyMixin\n");
        }
    }
}
