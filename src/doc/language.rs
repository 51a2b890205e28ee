/*!
# The Slate Language

## Statements

| Statement | Form |
|---|---|
| comment | `; anything` |
| declare | `DECLARE a, b, c` |
| assign | `a := expression` |
| if | `IF left <op> right` ... `ENDIF` |
| while | `WHILE left <op> right` ... `ENDWHILE` |
| input | `INPUT "prompt", a, b` |
| print | `PRINT item, item, ...` |
| println | `PRINTLN item, item, ...` |
| call | `name(arguments)` |
| function | `FUNCTION name(parms)` ... `RETURN expression` |
| procedure | `PROCEDURE name(parms)` ... `RETURN` |
| end | `ENDPROGRAM` |

## Expressions

Operators `+ - * / %` with the usual precedence, parentheses, unary minus,
integer literals, variables, and calls like `gcd(a, b)` anywhere a value
can appear. `rand()` is built in and yields 0 to 32767. Division and
remainder by zero stop the program with an error.

## Comparisons

`IF` and `WHILE` take one comparison: `=` `<` `>` `<=` `>=` `<>`. Both
sides are full expressions.

## Functions and procedures

A call pushes a slot for the result, the return address, then one slot
per argument; the body's `DECLARE`s stack on top of those. `RETURN` with
an expression is required in a `FUNCTION` and forbidden in a `PROCEDURE`.
Falling into the next `FUNCTION`/`PROCEDURE` header returns without a
value.

```text
DECLARE n
INPUT "How many rabbits?", n
PRINTLN "fib = ", fib(n)
RETURN
FUNCTION fib(n)
IF n < 2
RETURN n
ENDIF
RETURN fib(n - 1) + fib(n - 2)
```

## Errors

Faults are reported with the line number, like
`?DIVISION BY ZERO IN 12`, and stop the run. The interpreter finishes the
statement it is on first, so one bad statement reports one error.

*/
